// Support center: search header, quick links, tabbed knowledge-base body.

use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::toast;

const SUPPORT_PHONE: &str = "+1 (800) 123-4567";
const SUPPORT_EMAIL: &str = "support@dentiva.example";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupportTab {
    Popular,
    Guides,
    Tickets,
    Contact,
}

const ALL_TABS: [SupportTab; 4] = [
    SupportTab::Popular,
    SupportTab::Guides,
    SupportTab::Tickets,
    SupportTab::Contact,
];

impl SupportTab {
    fn label(self) -> &'static str {
        match self {
            SupportTab::Popular => "Popular Articles",
            SupportTab::Guides => "Guides",
            SupportTab::Tickets => "Support Tickets",
            SupportTab::Contact => "Contact Us",
        }
    }
}

struct Article {
    title: &'static str,
    blurb: &'static str,
    helpful: &'static str,
}

const POPULAR: &[Article] = &[
    Article {
        title: "Getting Started Guide",
        blurb: "Complete platform walkthrough",
        helpful: "95% Helpful",
    },
    Article {
        title: "Verifying a Supplier",
        blurb: "What the verification badge covers",
        helpful: "91% Helpful",
    },
    Article {
        title: "Bulk Purchasing Basics",
        blurb: "Pooled orders, tiers and cut-off dates",
        helpful: "88% Helpful",
    },
];

const GUIDES: &[Article] = &[
    Article {
        title: "Setting Up Your Clinic Profile",
        blurb: "Roles, locations and billing details",
        helpful: "12 min read",
    },
    Article {
        title: "Publishing a Catalog",
        blurb: "For suppliers: listings, pricing, stock",
        helpful: "18 min read",
    },
];

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = window().ok_or("No window".to_string())?;
    let clipboard = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
        .await
        .map_err(|_| "Clipboard write failed (HTTPS + user gesture required in some browsers)".to_string())?;
    Ok(())
}

fn copy_with_toast(label: &'static str, text: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        spawn_local(async move {
            match copy_to_clipboard(text.to_string()).await {
                Ok(()) => toast::success(format!("{label} copied to clipboard.")),
                Err(e) => toast::error(e),
            }
        });
    })
}

fn article_list(articles: &'static [Article]) -> Html {
    html! {
      <div class="stack">
        { for articles.iter().map(|article| {
            let onclick = {
                let title = article.title;
                Callback::from(move |_: MouseEvent| {
                    toast::info(format!("\"{title}\" opens in the help center."));
                })
            };
            html! {
              <div class="list-item" {onclick}>
                <div class="row">
                  <IconGlyph icon={Icon::FileText} />
                  <div>
                    <h4 style="margin:0;">{ article.title }</h4>
                    <span class="muted">{ article.blurb }</span>
                  </div>
                </div>
                <div class="row">
                  <span class="badge">
                    <IconGlyph icon={Icon::ThumbsUp} />
                    { article.helpful }
                  </span>
                  <IconGlyph icon={Icon::ChevronRight} />
                </div>
              </div>
            }
        }) }
      </div>
    }
}

#[function_component(SupportCenter)]
pub fn support_center() -> Html {
    let tab = use_state(|| SupportTab::Popular);
    let query = use_state(String::new);

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_search = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let q = query.trim().to_string();
            if q.is_empty() {
                toast::error("Type something to search for.");
            } else {
                toast::info(format!("No articles matched \"{q}\". Try the guides tab."));
            }
        })
    };

    let on_submit_ticket = Callback::from(move |_: MouseEvent| {
        toast::success("Ticket submitted. We reply within one business day.");
    });

    let quick_link = |icon: Icon, title: &'static str, blurb: &'static str, target: SupportTab| {
        let tab = tab.clone();
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
          <div class="card pad click center" {onclick}>
            <IconGlyph icon={icon} class="big" />
            <h3>{ title }</h3>
            <p class="muted">{ blurb }</p>
          </div>
        }
    };

    let body = match *tab {
        SupportTab::Popular => html! {
          <div class="card pad">
            <h3>{ "Most Helpful Resources" }</h3>
            { article_list(POPULAR) }
          </div>
        },
        SupportTab::Guides => html! {
          <div class="card pad">
            <h3>{ "Step-by-Step Guides" }</h3>
            { article_list(GUIDES) }
          </div>
        },
        SupportTab::Tickets => html! {
          <div class="card pad">
            <div class="row between">
              <h3>{ "Your Support Tickets" }</h3>
              <button class="btn primary" onclick={on_submit_ticket}>
                <IconGlyph icon={Icon::AlertCircle} />
                { " Submit Ticket" }
              </button>
            </div>
            <div class="list-item">
              <div>
                <div class="row">
                  <span class="badge">{ "Open" }</span>
                  <h4 style="margin:0;">{ "Integration Issue" }</h4>
                </div>
                <span class="muted">{ "Ticket #12345 • Created 2 hours ago" }</span>
              </div>
              <button class="btn">{ "View Details" }</button>
            </div>
          </div>
        },
        SupportTab::Contact => html! {
          <div class="grid cols-3">
            <div class="card pad center">
              <IconGlyph icon={Icon::Headphones} class="big" />
              <h3>{ "Call Us" }</h3>
              <p class="muted">{ "Available 24/7 for urgent issues" }</p>
              <button class="btn wide" onclick={copy_with_toast("Phone number", SUPPORT_PHONE)}>
                <IconGlyph icon={Icon::Phone} />
                { format!(" {SUPPORT_PHONE}") }
              </button>
            </div>
            <div class="card pad center">
              <IconGlyph icon={Icon::Mail} class="big" />
              <h3>{ "Email" }</h3>
              <p class="muted">{ "Answers within one business day" }</p>
              <button class="btn wide" onclick={copy_with_toast("Email address", SUPPORT_EMAIL)}>
                { SUPPORT_EMAIL }
              </button>
            </div>
            <div class="card pad center">
              <IconGlyph icon={Icon::MessageCircle} class="big" />
              <h3>{ "Live Chat" }</h3>
              <p class="muted">{ "Chat with our support team" }</p>
              <button
                class="btn primary wide"
                onclick={Callback::from(|_| toast::info("Live chat is not wired up in this preview."))}
              >
                { "Start Chat" }
              </button>
            </div>
          </div>
        },
    };

    html! {
      <div class="stack">
        <div class="card tinted pad center">
          <h2>{ "How can we help you?" }</h2>
          <p class="muted">{ "Search our knowledge base or get in touch with support" }</p>
          <div class="row">
            <div class="textline" style="flex:1;">
              <IconGlyph icon={Icon::Search} />
              <input
                type="text"
                value={(*query).clone()}
                oninput={on_query_input}
                placeholder="Search for answers..."
              />
            </div>
            <button class="btn" onclick={on_search}>{ "Search" }</button>
          </div>
        </div>

        <div class="grid cols-3">
          { quick_link(Icon::BookOpen, "Knowledge Base", "Find detailed guides and FAQs", SupportTab::Popular) }
          { quick_link(Icon::MessageCircle, "Live Chat", "Chat with our support team", SupportTab::Contact) }
          { quick_link(Icon::PlayCircle, "Video Tutorials", "Watch step-by-step guides", SupportTab::Guides) }
        </div>

        <div class="tabs" role="tablist" aria-label="Support sections">
          { for ALL_TABS.into_iter().map(|t| {
              let is_active = *tab == t;
              let cls = if is_active { "tab active" } else { "tab" };
              let tab = tab.clone();
              html! {
                <button
                  class={cls}
                  role="tab"
                  aria-selected={is_active.to_string()}
                  onclick={Callback::from(move |_| tab.set(t))}
                >
                  { t.label() }
                </button>
              }
          }) }
        </div>

        { body }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_are_unique() {
        let labels: Vec<_> = ALL_TABS.iter().map(|t| t.label()).collect();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn popular_articles_carry_helpfulness_scores() {
        assert!(!POPULAR.is_empty());
        for article in POPULAR {
            assert!(article.helpful.contains("Helpful"));
        }
    }
}
