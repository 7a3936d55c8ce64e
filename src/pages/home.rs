use yew::prelude::*;

use crate::components::category_card::CategoryCard;
use crate::components::logo::{DentivaLogo, LogoSize};
use crate::components::toast;
use crate::context::UserContext;
use crate::data::CATEGORIES;
use crate::layout::PageShell;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub user: UserContext,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let greeting = match &props.user.user_profile {
        Some(profile) if props.user.is_authenticated => {
            format!("Welcome back, {}", profile.name)
        }
        _ => "The dental B2B marketplace".to_string(),
    };

    html! {
      <PageShell
        user_type={props.user.user_type}
        is_authenticated={props.user.is_authenticated}
        user_profile={props.user.user_profile.clone()}
      >
        <div class="container">
          <section class="hero">
            <DentivaLogo size={LogoSize::Lg} show_text={false} />
            <h1>{ greeting }</h1>
            <p class="muted">
              { "Source equipment, consumables and services from verified suppliers, \
                 all in one clinic-grade catalog." }
            </p>
          </section>

          <h2 class="section-title">{ "Browse by Category" }</h2>
          <div class="grid cols-3">
            { for CATEGORIES.iter().map(|category| {
                let on_click = {
                    let title = category.title;
                    Callback::from(move |_| {
                        toast::info(format!("{title} browsing opens in the full marketplace."));
                    })
                };
                html! {
                  <CategoryCard
                    key={category.id}
                    icon={category.icon}
                    title={category.title}
                    description={category.description}
                    product_count={category.product_count}
                    {on_click}
                  />
                }
            }) }
          </div>
        </div>
      </PageShell>
    }
}
