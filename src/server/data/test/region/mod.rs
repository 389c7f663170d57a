use crate::server::{
    data::region::RegionRepository,
    model::region::{CreateRegionParam, UpdateRegionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_noc;
mod get_all;
mod update;
