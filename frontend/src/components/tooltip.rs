use uuid::Uuid;
use yew::{html, AttrValue, Component, Context, Html, Properties};

/// Hover label around any control. Visibility is handled by the stylesheet
/// (`.tooltip:hover .tooltip-bubble`).
pub struct Tooltip {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub text: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Tooltip {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("tooltip-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let text = ctx.props().text.clone();
        html! {
            <span class="tooltip" id={self.id.clone()} title={text.clone()}>
                { ctx.props().children.clone() }
                <span class="tooltip-bubble" role="tooltip">{ text }</span>
            </span>
        }
    }
}
