pub mod faction;
pub mod save;
pub mod unit;

pub use faction::{
    Faction, FactionId, FactionName, FactionAiSettings, FactionStats,
    FactionRelation, FactionOpinion, ClassCounts,
};
pub use save::{
    Save, Header, SaveVersion, PlayerState, Sector, SectorId,
    PatrolPath, PatrolPathNode,
};
pub use unit::{
    Unit, UnitId, UnitCargo, ShipTraderItem, UnitProjectile, DamageType,
    UnitModuleData, ShipName, FactoryState, ModdedComponent, ComponentCargo,
    ShieldPoint, ComponentHealth, UnitKinematics, UnitHealth,
    CUSTOM_SHIP_NAME_INDEX,
};
