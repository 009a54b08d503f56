use crate::models::commission::CommissionRow;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommissionTableProps {
    pub title: AttrValue,
    /// Header of the first column ("Date" or "Week")
    pub label_header: AttrValue,
    pub empty_message: AttrValue,
    pub rows: Rc<Vec<CommissionRow>>,
}

#[function_component(CommissionTable)]
pub fn commission_table(props: &CommissionTableProps) -> Html {
    html! {
        <section class="commission-card">
            <h2>{props.title.clone()}</h2>
            if props.rows.is_empty() {
                <p class="empty-state">{props.empty_message.clone()}</p>
            } else {
                <table class="commission-table">
                    <thead>
                        <tr>
                            <th>{props.label_header.clone()}</th>
                            <th>{"Total Commission"}</th>
                            <th>{"Total Payment"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for props.rows.iter().map(|row| html! {
                            <tr key={row.key.clone()}>
                                <td>{&row.label}</td>
                                <td class="amount">{&row.commission}</td>
                                <td class="amount">{&row.payment}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
            }
        </section>
    }
}
