use crate::server::{
    data::server::{
        basic::ServerBasicRepository, disk::ServerDiskRepository,
        network::ServerNetworkRepository, partition::ServerPartitionRepository,
        repository::ServerRepositoryRepository,
    },
    model::server::ServerFilterOptions,
};
use sea_orm::{DbBackend, DbErr, QueryTrait};
use test_utils::{builder::TestBuilder, factory};

mod filtered;
mod find_all;
mod find_by_system_name;
mod find_by_system_names;
