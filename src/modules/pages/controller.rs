use axum::{extract::Query, response::Html};

use crate::modules::pages::model::AuthPageQuery;
use crate::utils::html::escape;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/properties", "Properties"),
    ("/contacts", "Contacts"),
];

fn document(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | NextProp</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    ))
}

fn dashboard_shell(title: &str) -> Html<String> {
    let nav = NAV_LINKS
        .iter()
        .map(|(href, label)| format!("<li><a href=\"{href}\">{label}</a></li>"))
        .collect::<String>();

    document(
        title,
        &format!(
            "<nav><ul>{nav}</ul></nav>\n<header><h1>{}</h1></header>\n<main id=\"app\"></main>",
            escape(title)
        ),
    )
}

fn auth_shell(title: &str, query: &AuthPageQuery) -> Html<String> {
    let notice = query
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .map(|m| format!("<p class=\"notice\" role=\"status\">{}</p>\n", escape(m)))
        .unwrap_or_default();

    let from = query
        .from
        .as_deref()
        .map(|f| format!("<input type=\"hidden\" name=\"from\" value=\"{}\">", escape(f)))
        .unwrap_or_default();

    document(
        title,
        &format!(
            "<main>\n<h1>{}</h1>\n{notice}<form method=\"post\">{from}</form>\n</main>",
            escape(title)
        ),
    )
}

pub async fn dashboard_page() -> Html<String> {
    dashboard_shell("Dashboard")
}

pub async fn properties_page() -> Html<String> {
    dashboard_shell("Properties")
}

pub async fn contacts_page() -> Html<String> {
    dashboard_shell("Contacts")
}

pub async fn login_page(Query(query): Query<AuthPageQuery>) -> Html<String> {
    auth_shell("Sign in", &query)
}

pub async fn signup_page(Query(query): Query<AuthPageQuery>) -> Html<String> {
    auth_shell("Create an account", &query)
}

pub async fn forgot_password_page(Query(query): Query<AuthPageQuery>) -> Html<String> {
    auth_shell("Reset your password", &query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_shell_has_title_and_nav() {
        let Html(page) = dashboard_shell("Properties");
        assert!(page.contains("<title>Properties | NextProp</title>"));
        assert!(page.contains("<h1>Properties</h1>"));
        assert!(page.contains("href=\"/contacts\""));
    }

    #[test]
    fn test_auth_shell_shows_escaped_message() {
        let query = AuthPageQuery {
            from: Some("/properties".into()),
            message: Some("<b>Please sign in</b>".into()),
        };
        let Html(page) = auth_shell("Sign in", &query);
        assert!(page.contains("&lt;b&gt;Please sign in&lt;/b&gt;"));
        assert!(page.contains("value=\"/properties\""));
    }

    #[test]
    fn test_auth_shell_without_message() {
        let Html(page) = auth_shell("Sign in", &AuthPageQuery::default());
        assert!(!page.contains("class=\"notice\""));
    }
}
