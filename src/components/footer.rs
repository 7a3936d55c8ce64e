use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::logo::{DentivaLogo, LogoSize};

struct FooterColumn {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Platform",
        links: &[
            ("Marketplace", "/marketplace"),
            ("For Suppliers", "/vendors"),
            ("Analytics", "/analytics"),
            ("API", "/api"),
        ],
    },
    FooterColumn {
        title: "Support",
        links: &[
            ("Help Center", "/help"),
            ("Contact", "/contact"),
            ("Book Demo", "/demo"),
            ("System Status", "/status"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            ("About", "/about"),
            ("Careers", "/careers"),
            ("Privacy", "/privacy"),
            ("Terms", "/terms"),
        ],
    },
];

const COMPLIANCE: &[(Icon, &str)] = &[
    (Icon::Shield, "ISO 13485 Certified"),
    (Icon::Award, "SOC 2 Compliant"),
    (Icon::Globe, "GDPR Ready"),
];

/// Static site footer. Takes no props; identical on every page.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
      <footer class="site-footer">
        <div class="container">
          <div class="footer-grid">
            <div>
              <DentivaLogo size={LogoSize::Sm} />
              <p class="footer-tagline">
                { "Empowering dental commerce through smart procurement and verified supplier networks." }
              </p>
            </div>

            { for COLUMNS.iter().map(|col| html! {
                <div>
                  <h4>{ col.title }</h4>
                  <ul>
                    { for col.links.iter().map(|(name, href)| html! {
                        <li><a href={*href}>{ *name }</a></li>
                    }) }
                  </ul>
                </div>
            }) }
          </div>

          <div class="footer-bottom">
            <span>{ "© 2025 Dentiva. All rights reserved." }</span>
            <span class="row">
              { for COMPLIANCE.iter().map(|(icon, label)| html! {
                  <span class="row">
                    <IconGlyph icon={*icon} />
                    { *label }
                  </span>
              }) }
            </span>
          </div>
        </div>
      </footer>
    }
}
