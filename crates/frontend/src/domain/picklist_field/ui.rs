//! Picklist buttons view: one button per selectable value, the current
//! record value highlighted. Picking a button persists the value.

use leptos::prelude::*;
use thaw::*;

use super::view_model::PicklistFieldVm;
use crate::shared::toast::ToastService;

#[component]
pub fn PicklistButtons(
    record_id: String,
    object_api_name: String,
    label: String,
    qualified_field_name: String,
) -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided");
    let vm = PicklistFieldVm::new(
        record_id,
        object_api_name,
        label,
        qualified_field_name,
        toasts,
    );

    // Fixed-parameter feeds fire once on mount
    vm.load_object_info();
    vm.load_record();

    // The picklist feed follows the resolved record type and re-issues
    // whenever the (record type, field) pair changes
    Effect::new({
        let vm = vm.clone();
        move || {
            if let Some((record_type_id, _field)) = vm.next_picklist_request() {
                vm.load_picklist_values(record_type_id);
            }
        }
    });

    let heading = {
        let label = vm.label.clone();
        (!label.is_empty()).then(|| view! { <h3 class="picklist-field__label">{label}</h3> })
    };

    let vm_buttons = vm.clone();

    view! {
        <div class="picklist-field">
            {heading}

            <ErrorDisplay vm=vm.clone() />

            <Flex gap=FlexGap::Small align=FlexAlign::Center style="flex-wrap: wrap;">
                {move || {
                    let vm = vm_buttons.clone();
                    vm.buttons
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let value = entry.value.clone();
                            let appearance = Signal::derive({
                                let vm = vm.clone();
                                let value = value.clone();
                                move || {
                                    if vm.picklist_value.get().as_deref() == Some(value.as_str()) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                }
                            });
                            let disabled = Signal::derive({
                                let vm = vm.clone();
                                move || vm.saving.get()
                            });
                            let on_click = {
                                let vm = vm.clone();
                                move |_| vm.commit(value.clone())
                            };
                            view! {
                                <Button
                                    appearance=appearance
                                    size=ButtonSize::Small
                                    on_click=on_click
                                    disabled=disabled
                                >
                                    {entry.label.clone()}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
            </Flex>
        </div>
    }
}

/// Latest feed error, shown above the buttons.
#[component]
fn ErrorDisplay(vm: PicklistFieldVm) -> impl IntoView {
    let error_message = vm.error_message;

    view! {
        {move || error_message.get().map(|message| view! {
            <div style="margin-bottom: 8px;">
                <MessageBar intent=MessageBarIntent::Error>
                    <div>{message}</div>
                </MessageBar>
            </div>
        })}
    }
}
