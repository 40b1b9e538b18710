//! Member entity <-> model mapper

use bridge_core::entities::Member;
use bridge_core::value_objects::MemberId;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.member_id),
            display_name: model.member_name,
            linked: model.member_linked,
        }
    }
}
