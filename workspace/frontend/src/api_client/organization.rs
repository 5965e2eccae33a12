use common::datatable::encode_pairs;
use common::{ListResource, OrganizationAccountDto, OrganizationDto};
use crate::api_client;

/// Look up an organization by its slug
pub async fn get_organization_by_slug(slug: &str) -> Result<OrganizationDto, String> {
    log::trace!("Fetching organization with slug: {}", slug);
    let endpoint = api_client::with_query(
        "/organizations",
        &encode_pairs(&[("slug".to_string(), slug.to_string())]),
    );

    let result = api_client::get::<ListResource<OrganizationDto>>(&endpoint)
        .await
        .and_then(|list| {
            list.items
                .into_iter()
                .next()
                .ok_or_else(|| format!("Organization '{}' not found", slug))
        });

    match &result {
        Ok(organization) => log::info!("Fetched organization: {} (ID: {})", organization.name, organization.id),
        Err(e) => log::error!("Failed to fetch organization '{}': {}", slug, e),
    }
    result
}

/// Get the payout account of an organization, if one has been set up
pub async fn get_organization_account(organization_id: &str) -> Result<Option<OrganizationAccountDto>, String> {
    log::trace!("Fetching account for organization ID: {}", organization_id);
    let result = api_client::get::<Option<OrganizationAccountDto>>(&format!("/organizations/{}/account", organization_id)).await;
    match &result {
        Ok(Some(account)) => log::info!("Fetched account {} for organization ID: {}", account.id, organization_id),
        Ok(None) => log::info!("Organization {} has no payout account", organization_id),
        Err(e) => log::error!("Failed to fetch account for organization {}: {}", organization_id, e),
    }
    result
}

