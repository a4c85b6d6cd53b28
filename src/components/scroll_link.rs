use yew::prelude::*;

use crate::config;
use crate::scroll::scroll_to_anchor;

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    /// Id of the section to scroll to.
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the scroll starts, and also when `to` matches nothing.
    #[prop_or_default]
    pub onactivate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let onactivate = props.onactivate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(&to, config::SCROLL_DURATION_MS, config::HEADER_OFFSET_PX);
            if let Some(onactivate) = &onactivate {
                onactivate.emit(());
            }
        })
    };

    html! {
        <a href={format!("#{}", props.to)} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
