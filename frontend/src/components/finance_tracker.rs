use super::{input_value, submit_handler};
use crate::hooks::use_finance::use_finance;
use crate::services::date_utils::{format_amount, format_timestamp};
use shared::TransactionKind;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(FinanceTracker)]
pub fn finance_tracker() -> Html {
    let finance = use_finance();
    let state = &finance.state;
    let actions = &finance.actions;
    let summary = state.summary;

    let on_kind_change = {
        let set_kind = actions.set_kind.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            match TransactionKind::parse(&value) {
                Some(kind) => set_kind.emit(kind),
                None => log::warn!("Unknown transaction kind '{}'", value),
            }
        })
    };
    let on_amount_input = {
        let set_amount = actions.set_amount.clone();
        Callback::from(move |e: InputEvent| set_amount.emit(input_value(&e)))
    };
    let on_description_input = {
        let set_description = actions.set_description.clone();
        Callback::from(move |e: InputEvent| set_description.emit(input_value(&e)))
    };

    html! {
        <section class="card finance-tracker">
            <div class="finance-header">
                <h2>{"💰 Income & Expenses"}</h2>
                <div class="finance-summary">
                    <span class="amount positive">{format!("▲ {}", format_amount(summary.income))}</span>
                    <span class="amount negative">{format!("▼ {}", format_amount(summary.expense))}</span>
                    <span class="balance">{format!("Balance: {}", format_amount(summary.balance))}</span>
                </div>
            </div>

            <form class="finance-form" onsubmit={submit_handler(actions.add_transaction.clone())}>
                <select onchange={on_kind_change}>
                    <option value={TransactionKind::Income.as_str()} selected={state.kind == TransactionKind::Income}>
                        {"Income"}
                    </option>
                    <option value={TransactionKind::Expense.as_str()} selected={state.kind == TransactionKind::Expense}>
                        {"Expense"}
                    </option>
                </select>
                <input
                    type="number"
                    step="0.01"
                    placeholder="Amount"
                    value={state.amount.clone()}
                    oninput={on_amount_input}
                />
                <input
                    type="text"
                    placeholder="Description"
                    value={state.description.clone()}
                    oninput={on_description_input}
                />
                <button type="submit" class="btn btn-primary">{"Add"}</button>
            </form>

            {if state.transactions.is_empty() {
                html! { <p class="empty-state">{"No transactions yet."}</p> }
            } else {
                html! {
                    <ul class="transaction-list">
                        {for state.transactions.iter().map(|tx| {
                            let amount_class = match tx.kind {
                                TransactionKind::Income => "amount positive",
                                TransactionKind::Expense => "amount negative",
                            };
                            html! {
                                <li key={tx.id.clone()} class="transaction-item">
                                    <div class="transaction-info">
                                        <span class="transaction-description">{&tx.description}</span>
                                        <span class="transaction-date">{format_timestamp(tx.created_at)}</span>
                                    </div>
                                    <span class={amount_class}>{format_amount(tx.signed_amount())}</span>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
