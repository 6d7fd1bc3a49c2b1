use yew::prelude::*;

use crate::services::Services;

pub mod contact;
pub mod course;
pub mod home;
pub mod policy;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub services: Services,
}
