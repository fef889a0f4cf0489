//! 헌혈자 엔티티 모듈

pub mod donor;
pub mod blood_group;

pub use donor::{Donor, NewDonor};
pub use blood_group::BloodGroup;
