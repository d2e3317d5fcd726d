use super::use_planner_host::use_planner_host;
use planner_backend::FinanceService;
use shared::{FinanceSummary, Transaction, TransactionKind};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct FinanceState {
    pub transactions: Vec<Transaction>,
    pub summary: FinanceSummary,
    pub kind: TransactionKind,
    pub amount: String,
    pub description: String,
}

#[derive(Clone, PartialEq)]
pub struct UseFinanceActions {
    pub set_kind: Callback<TransactionKind>,
    pub set_amount: Callback<String>,
    pub set_description: Callback<String>,
    pub add_transaction: Callback<()>,
}

pub struct UseFinanceResult {
    pub state: FinanceState,
    pub actions: UseFinanceActions,
}

#[hook]
pub fn use_finance() -> UseFinanceResult {
    let host = use_planner_host();
    let service = use_mut_ref(move || FinanceService::load(host.store.clone(), host.clock.clone(), &host.config));
    let kind = use_state(|| TransactionKind::Income);
    let amount = use_state(String::new);
    let description = use_state(String::new);
    let force_update = use_force_update();

    let set_kind = {
        let kind = kind.clone();
        Callback::from(move |value: TransactionKind| kind.set(value))
    };
    let set_amount = {
        let amount = amount.clone();
        Callback::from(move |value: String| amount.set(value))
    };
    let set_description = {
        let description = description.clone();
        Callback::from(move |value: String| description.set(value))
    };

    // The selected kind is kept after a successful add
    let add_transaction = {
        let service = service.clone();
        let kind = kind.clone();
        let amount = amount.clone();
        let description = description.clone();
        Callback::from(move |_: ()| {
            let added = service.borrow_mut().add_transaction(*kind, &amount, &description);
            if added.is_ok() {
                amount.set(String::new());
                description.set(String::new());
                force_update.force_update();
            }
        })
    };

    let state = {
        let service = service.borrow();
        FinanceState {
            transactions: service.transactions().to_vec(),
            summary: service.summary(),
            kind: *kind,
            amount: (*amount).clone(),
            description: (*description).clone(),
        }
    };

    UseFinanceResult {
        state,
        actions: UseFinanceActions { set_kind, set_amount, set_description, add_transaction },
    }
}
