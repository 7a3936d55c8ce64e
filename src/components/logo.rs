use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LogoSize {
    pub fn mark_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-mark sm",
            LogoSize::Md => "logo-mark md",
            LogoSize::Lg => "logo-mark lg",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            LogoSize::Sm => "logo-text sm",
            LogoSize::Md => "logo-text md",
            LogoSize::Lg => "logo-text lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DentivaLogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or(true)]
    pub show_text: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Brand mark plus optional gradient wordmark.
#[function_component(DentivaLogo)]
pub fn dentiva_logo(props: &DentivaLogoProps) -> Html {
    html! {
      <div class={classes!("logo", props.class.clone())} onclick={props.onclick.clone()}>
        // Tooth-shaped mark, drawn inline so the app ships no image assets.
        <svg
          class={props.size.mark_class()}
          viewBox="0 0 24 24"
          fill="none"
          stroke="currentColor"
          stroke-width="1.8"
          stroke-linecap="round"
          stroke-linejoin="round"
          aria-hidden="true"
        >
          <path d="M12 5.5c-1.5-2-4-2.8-6-1.6-2.3 1.4-2.6 4.6-1.4 7.2 1.2 2.7 1.9 5.6 2.5 8.4.2 1 1.5 1.1 1.9.2l1.6-4.2c.5-1.2 2.3-1.2 2.8 0l1.6 4.2c.4.9 1.7.8 1.9-.2.6-2.8 1.3-5.7 2.5-8.4 1.2-2.6.9-5.8-1.4-7.2-2-1.2-4.5-.4-6 1.6z" />
        </svg>

        if props.show_text {
          <h1 class={props.size.text_class()}>{ "Dentiva" }</h1>
        }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::LogoSize;

    #[test]
    fn default_size_is_medium() {
        assert_eq!(LogoSize::default(), LogoSize::Md);
    }

    #[test]
    fn size_classes_are_distinct() {
        let sizes = [LogoSize::Sm, LogoSize::Md, LogoSize::Lg];
        for window in sizes.windows(2) {
            assert_ne!(window[0].mark_class(), window[1].mark_class());
            assert_ne!(window[0].text_class(), window[1].text_class());
        }
    }

    #[test]
    fn text_class_tracks_size_suffix() {
        assert!(LogoSize::Sm.text_class().ends_with("sm"));
        assert!(LogoSize::Lg.text_class().ends_with("lg"));
    }
}
