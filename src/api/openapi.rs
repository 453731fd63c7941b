use super::handlers::{health, hero_powers, heroes, powers};
use utoipa::openapi::{Contact, Info, License, OpenApiBuilder, Tag};
use utoipa_axum::{router::OpenApiRouter, routes};

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Reuse the same router wiring and only return the generated OpenAPI document.
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Add new endpoints here via `.routes(routes!(...))` so they are both served
/// and included in the generated document. Handlers sharing a path go in the
/// same `routes!` call. Routes added outside (like `/`) are not documented.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(heroes::list_heroes))
        .routes(routes!(heroes::get_hero, heroes::delete_hero))
        .routes(routes!(powers::list_powers))
        .routes(routes!(
            powers::get_power,
            powers::update_power,
            powers::delete_power
        ))
        .routes(routes!(hero_powers::create_hero_power));

    let tags: Vec<Tag> = [
        ("heroes", "Heroes and the powers they hold"),
        ("powers", "Powers and their descriptions"),
        ("hero_powers", "Links between heroes and powers"),
        ("health", "Service and database status"),
    ]
    .into_iter()
    .map(|(name, description)| {
        let mut tag = Tag::new(name);
        tag.description = Some(description.to_string());
        tag
    })
    .collect();

    router.get_openapi_mut().tags = Some(tags);

    router
}

/// Document info comes from the package manifest.
fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let mut info = Info::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info.description = non_empty(env!("CARGO_PKG_DESCRIPTION")).map(str::to_string);
    info.contact = env!("CARGO_PKG_AUTHORS")
        .split(';')
        .find_map(author_contact);
    info.license = non_empty(env!("CARGO_PKG_LICENSE")).map(|id| {
        let mut license = License::new(id);
        license.identifier = Some(id.to_string());
        license
    });

    OpenApiBuilder::new().info(info).build()
}

/// Reads a manifest author, `Name <email>`, where either half may be missing.
fn author_contact(author: &str) -> Option<Contact> {
    let (name, email) = match author.split_once('<') {
        Some((name, rest)) => (non_empty(name), non_empty(rest.trim_end().trim_end_matches('>'))),
        None => (non_empty(author), None),
    };
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let doc = openapi();
        assert_eq!(doc.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(doc.info.version, env!("CARGO_PKG_VERSION"));

        let contact = doc.info.contact;
        assert!(contact.is_some());
        if let Some(contact) = contact {
            assert_eq!(contact.name.as_deref(), Some("Team Superheroes"));
            assert_eq!(contact.email.as_deref(), Some("team@superheroes.dev"));
        }

        let license = doc.info.license;
        assert!(license.is_some());
        if let Some(license) = license {
            assert_eq!(license.identifier.as_deref(), Some("BSD-3-Clause"));
        }
    }

    #[test]
    fn openapi_documents_every_route() {
        let doc = openapi();
        for path in [
            "/health",
            "/heroes",
            "/heroes/{id}",
            "/powers",
            "/powers/{id}",
            "/hero_powers",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }

        let tags = doc.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "hero_powers"));
    }

    #[test]
    fn author_contact_accepts_partial_authors() {
        let full = author_contact(" Jane Doe <jane@example.com> ");
        assert_eq!(
            full.as_ref().map(|c| (c.name.as_deref(), c.email.as_deref())),
            Some((Some("Jane Doe"), Some("jane@example.com")))
        );

        let name_only = author_contact("Jane Doe");
        assert_eq!(
            name_only.as_ref().map(|c| (c.name.as_deref(), c.email.as_deref())),
            Some((Some("Jane Doe"), None))
        );

        let email_only = author_contact("<jane@example.com>");
        assert_eq!(
            email_only.as_ref().map(|c| (c.name.as_deref(), c.email.as_deref())),
            Some((None, Some("jane@example.com")))
        );

        assert!(author_contact("  ").is_none());
        assert!(author_contact("<>").is_none());
    }
}
