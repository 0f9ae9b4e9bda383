use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Extra classes appended to the banner's own
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class={classes!("error-banner", props.class.clone())} role="alert">
            <span class="error-banner-icon">{"⚠"}</span>
            <p class="error-banner-message">{&props.message}</p>
        </div>
    }
}
