mod order;
mod tshirt;

pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::tshirt::{
    DynTshirtCommandRepository, DynTshirtCommandService, DynTshirtQueryRepository,
    DynTshirtQueryService, TshirtCommandRepositoryTrait, TshirtCommandServiceTrait,
    TshirtQueryRepositoryTrait, TshirtQueryServiceTrait,
};
