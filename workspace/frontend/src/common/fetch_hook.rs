use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::FetchState;
use crate::common::toast::ToastContext;

/// Bumped by `refetch`. A reducer rather than a plain state so callbacks held
/// across renders always increment the latest value.
#[derive(PartialEq)]
struct ReloadCounter(u64);

impl Reducible for ReloadCounter {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        Rc::new(Self(self.0 + 1))
    }
}

/// Fetches data for `deps` and refetches whenever `deps` change.
///
/// `None` means the inputs are not known yet: nothing is requested and the
/// state stays `NotStarted`. Each run bumps a generation counter and a
/// response is only applied if no newer run started while it was in flight,
/// so a superseded request can never overwrite fresher data.
#[hook]
pub fn use_fetch_with_deps<D, T, F, Fut>(deps: Option<D>, fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    D: Clone + PartialEq + 'static,
    T: 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::NotStarted);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));
    let generation = use_mut_ref(|| 0u64);
    let reload = use_reducer(|| ReloadCounter(0));

    let refetch = {
        let reload = reload.dispatcher();
        use_callback((), move |_, _| {
            log::debug!("Refetch requested");
            reload.dispatch(());
        })
    };

    {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();
        let generation = generation.clone();

        use_effect_with((deps, reload.0), move |(deps, _)| {
            let current = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };

            match deps.clone() {
                None => {
                    log::trace!("Fetch inputs not ready, skipping request");
                    fetch_state.set(FetchState::NotStarted);
                }
                Some(deps) => {
                    fetch_state.set(FetchState::Loading);
                    let fut = (*fetch_fn)(deps);

                    wasm_bindgen_futures::spawn_local(async move {
                        let result = fut.await;
                        if *generation.borrow() != current {
                            log::debug!("Dropping response of superseded request #{}", current);
                            return;
                        }

                        match result {
                            Ok(data) => fetch_state.set(FetchState::Success(data)),
                            Err(err) => {
                                fetch_state.set(FetchState::Error(err.clone()));
                                if let Some(toast_ctx) = toast_ctx {
                                    toast_ctx.show_error(err);
                                }
                            }
                        }
                    });
                }
            }

            || ()
        });
    }

    (fetch_state, refetch)
}
