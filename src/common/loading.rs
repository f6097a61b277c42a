use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    /// Optional caption shown under the spinner.
    #[prop_or_default]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    Small,
    Medium,
    #[default]
    Large,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
            LoadingSize::Large => "loading-lg",
        }
    }
}

/// Centered spinner used while a fetch is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let caption = props
        .text
        .as_ref()
        .map(|text| html! { <p class="text-sm text-gray-500">{text}</p> })
        .unwrap_or_default();

    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            {caption}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_classes_are_distinct_and_default_is_large() {
        let classes = [
            LoadingSize::Small.class(),
            LoadingSize::Medium.class(),
            LoadingSize::Large.class(),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(LoadingSize::default().class(), "loading-lg");
    }
}
