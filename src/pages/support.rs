use yew::prelude::*;

use crate::components::support::SupportCenter;
use crate::layout::PageShell;

/// Support is a public page: it always renders with the logged-out header,
/// matching how the rest of the help surfaces behave.
#[function_component(SupportPage)]
pub fn support_page() -> Html {
    html! {
      <PageShell>
        <div class="container" style="padding-top:32px;">
          <SupportCenter />
        </div>
      </PageShell>
    }
}
