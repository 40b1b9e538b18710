//! LinkedAccount entity <-> model mapper

use bridge_core::entities::LinkedAccount;
use bridge_core::value_objects::{AccountId, MemberId};

use crate::models::LinkedAccountModel;

impl From<LinkedAccountModel> for LinkedAccount {
    fn from(model: LinkedAccountModel) -> Self {
        LinkedAccount {
            account_id: AccountId::new(model.account_id),
            account_name: model.account_name,
            member_id: MemberId::new(model.member_id),
            linked_at: model.linked_at,
        }
    }
}
