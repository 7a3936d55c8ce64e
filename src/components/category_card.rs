use yew::prelude::*;

use crate::components::icons::{Icon, IconGlyph};

#[derive(Properties, PartialEq)]
pub struct CategoryCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub description: AttrValue,
    pub product_count: u32,
    #[prop_or_default]
    pub on_click: Callback<()>,
}

/// Clickable storefront category tile: icon medallion, title, blurb and a
/// product count.
#[function_component(CategoryCard)]
pub fn category_card(props: &CategoryCardProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(()))
    };

    html! {
      <div class="card pad click center" {onclick}>
        <div class="medallion">
          <IconGlyph icon={props.icon} />
        </div>
        <h3>{ props.title.clone() }</h3>
        <p class="muted">{ props.description.clone() }</p>
        <div class="count">{ format!("{} Products", props.product_count) }</div>
      </div>
    }
}
