use contracts::domain::a001_artifact::aggregate::ActionEvent;
use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, ButtonAppearance};

use super::classify::{classify, DetailKind};
use super::friend::FriendProfilePanel;
use super::generic::GenericLayout;
use super::invite::InviteFlowPanel;
use super::order::OrderStatusLayout;
use super::ticket::TicketLayout;
use crate::shared::icons::icon;

/// Side panel that classifies `item` once and shows the matching layout
#[component]
#[allow(non_snake_case)]
pub fn DetailInspector(
    item: Value,
    on_action: Callback<ActionEvent>,
    on_close: Callback<()>,
) -> impl IntoView {
    let kind = classify(&item);
    log::debug!("detail inspector: {:?}", kind);

    let body = match kind {
        DetailKind::Invite => view! { <InviteFlowPanel item=item on_action=on_action /> }.into_any(),
        DetailKind::Friend => view! { <FriendProfilePanel item=item on_action=on_action /> }.into_any(),
        DetailKind::Ticket => view! { <TicketLayout item=item /> }.into_any(),
        DetailKind::Order => view! { <OrderStatusLayout item=item /> }.into_any(),
        DetailKind::Generic => view! { <GenericLayout item=item on_action=on_action /> }.into_any(),
    };

    view! {
        <aside style="width: 340px; flex-shrink: 0; padding: 16px; border-left: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground1); overflow-y: auto;">
            <div style="display: flex; justify-content: flex-end;">
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    {icon("close")}
                </Button>
            </div>
            {body}
        </aside>
    }
}
