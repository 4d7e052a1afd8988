use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value; written as a DOM property so form resets show up
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "number", "date"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `min`/`max`/`step` hints for number inputs; not enforced in logic
    #[prop(optional, into)]
    min: MaybeProp<String>,
    #[prop(optional, into)]
    max: MaybeProp<String>,
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                title=input_placeholder
                min=move || min.get()
                max=move || max.get()
                step=move || step.get()
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
