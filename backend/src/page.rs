use maud::{html, Markup, DOCTYPE};

const PROJECT_URL: &str = "https://github.com/WardPearce/Sourcemod-SQLMatches";

/// Wraps a page body with the head, site heading, footer and scripts shared
/// by every page.
pub fn layout(site_name: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0, shrink-to-fit=no";
                title { (site_name) }
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/twitter-bootstrap/4.1.2/css/bootstrap.min.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/animate.css/3.5.2/animate.min.css";
                link rel="stylesheet" href="/assets/css/styles.css";
            }
            body {
                a href="/" style="color:#000000;" {
                    h1 class="text-center" style="margin-top:15px;" { (site_name) }
                }
                (body)
                div class="bottom" {
                    a href=(PROJECT_URL) target="_blank" { "Created By Ward" }
                }
                script src="https://cdnjs.cloudflare.com/ajax/libs/jquery/3.2.1/jquery.min.js" {}
                script src="https://cdnjs.cloudflare.com/ajax/libs/twitter-bootstrap/4.1.2/js/bootstrap.bundle.min.js" {}
                script src="/assets/js/bs-animation.js" {}
            }
        }
    }
}

/// Page shown when a request fails. Carries no detail about the failure.
pub fn error_page() -> Markup {
    layout(
        "Error",
        html! {
            h4 style="margin-top:40px;text-align:center;" {
                "Something went wrong while loading this page."
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_site_name() {
        let page = layout("<b>Matches</b>", html! { p { "body" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>&lt;b&gt;Matches&lt;/b&gt;</title>"));
        assert!(page.contains("<p>body</p>"));
        assert!(!page.contains("<b>Matches</b>"));
    }

    #[test]
    fn error_page_is_generic() {
        let page = error_page().into_string();
        assert!(page.contains("Something went wrong"));
    }
}
