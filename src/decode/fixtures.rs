//! Encoders for building save buffers in tests

use crate::codec::{BinaryWriter, GameTime, Vector4};
use crate::decode::unit::is_projectile_class;
use crate::state::{
    DamageType, Faction, FactionId, FactionName, Header, PatrolPath, PlayerState, SaveVersion,
    Sector, ShipName, Unit, UnitId, UnitModuleData, UnitProjectile, CUSTOM_SHIP_NAME_INDEX,
};

pub fn sector(id: i32) -> Sector {
    Sector {
        id,
        name: format!("Sector {id}"),
        resource_name: format!("Sector_{id}"),
        gate_distance_multiplier: 1.0,
        ..Sector::default()
    }
}

pub fn faction(id: FactionId) -> Faction {
    Faction {
        id,
        name: FactionName::Generated { name_id: id, suffix_id: 0 },
        credits: 1000,
        description: format!("Faction {id}"),
        ..Faction::default()
    }
}

pub fn unit(id: UnitId, class_id: i32) -> Unit {
    Unit {
        id,
        class_id,
        sector_id: 1,
        rotation: Vector4::new(0.0, 0.0, 0.0, 1.0),
        faction_id: 1,
        ..Unit::default()
    }
}

pub fn write_header(writer: &mut BinaryWriter, header: &Header) {
    writer.write_i32_le(header.version.major);
    writer.write_i32_le(header.version.minor);
    writer.write_i32_le(header.version.build);
    writer.write_bool(header.is_autosave);
    writer.write_string(&header.timestamp);
    writer.write_i32_le(header.scenario_info_id);
    writer.write_i32_le(header.global_save_number);
    writer.write_i32_le(header.save_number);
    writer.write_bool(header.player.is_some());
    if let Some(player) = &header.player {
        writer.write_string(&player.sector_name);
        writer.write_string(&player.player_name);
        writer.write_i32_le(player.credits);
    }
}

pub fn write_sector(writer: &mut BinaryWriter, sector: &Sector) {
    writer.write_i32_le(sector.id);
    writer.write_string(&sector.name);
    writer.write_vector3(sector.map_position);
    writer.write_string(&sector.resource_name);
    writer.write_string(&sector.description);
    writer.write_f32_le(sector.gate_distance_multiplier);
    writer.write_i32_le(sector.random_seed);
    writer.write_vector3(sector.position);
    writer.write_vector3(sector.background_rotation);
    writer.write_vector3(sector.light_rotation);
}

pub fn write_faction(writer: &mut BinaryWriter, faction: &Faction) {
    writer.write_i32_le(faction.id);
    match &faction.name {
        FactionName::Generated { name_id, suffix_id } => {
            writer.write_bool(true);
            writer.write_i32_le(*name_id);
            writer.write_i32_le(*suffix_id);
        }
        FactionName::Custom { name, short_name } => {
            writer.write_bool(false);
            writer.write_bool(true);
            writer.write_string(name);
            writer.write_string(short_name);
        }
        FactionName::Unnamed => {
            writer.write_bool(false);
            writer.write_bool(false);
        }
    }
    writer.write_i32_le(faction.credits);
    writer.write_string(&faction.description);
    writer.write_bool(faction.is_civilian);
    writer.write_i32_le(faction.faction_type);
    writer.write_f32_le(faction.aggression);
    writer.write_f32_le(faction.virtue);
    writer.write_f32_le(faction.greed);
    writer.write_f32_le(faction.trade_efficiency);
    writer.write_bool(faction.dynamic_relations);
    writer.write_bool(faction.show_job_boards);
    writer.write_bool(faction.create_jobs);
    writer.write_f32_le(faction.requisition_point_multiplier);
    writer.write_bool(faction.destroy_when_no_units);
    writer.write_f32_le(faction.min_npc_combat_efficiency);
    writer.write_f32_le(faction.max_npc_combat_efficiency);
    writer.write_i32_le(faction.additional_rp_provision);
    writer.write_bool(faction.trade_illegal_goods);
    writer.write_game_time(faction.spawn_time);
    writer.write_i32_le(faction.highest_ever_networth);

    writer.write_bool(faction.ai_settings.is_some());
    if let Some(ai) = &faction.ai_settings {
        writer.write_bool(ai.prefer_single_ship);
        writer.write_bool(ai.repair_ships);
        writer.write_bool(ai.upgrade_ships);
        writer.write_f32_le(ai.repair_min_hull_damage);
        writer.write_i32_le(ai.repair_min_credits_before_repair);
        writer.write_f32_le(ai.preference_to_place_bounty);
        writer.write_f32_le(ai.large_ship_preference);
        writer.write_i32_le(ai.daily_income);
        writer.write_bool(ai.hostile_with_all);
        writer.write_i32_le(ai.min_fleet_unit_count);
        writer.write_i32_le(ai.max_fleet_unit_count);
        writer.write_f32_le(ai.offensive_stance);
        writer.write_bool(ai.allow_other_factions_to_use_docks);
        writer.write_f32_le(ai.preference_to_build_turrets);
        writer.write_f32_le(ai.preference_to_build_stations);
        writer.write_bool(ai.ignore_stations_credit_reserve);
    }

    writer.write_bool(faction.stats.is_some());
    if let Some(stats) = &faction.stats {
        writer.write_i32_le(stats.total_ships_claimed);
        for counts in [&stats.units_destroyed_by_class_id, &stats.units_lost_by_class_id] {
            writer.write_count(counts.len());
            for (class_id, count) in counts {
                writer.write_i32_le(*class_id);
                writer.write_i32_le(*count);
            }
        }
        writer.write_i32_le(stats.scratchcards_scratched);
        writer.write_i32_le(stats.highest_scratchcard_win);
    }

    writer.write_count(faction.autopilot_excluded_sectors.len());
    for sector_id in &faction.autopilot_excluded_sectors {
        writer.write_i32_le(*sector_id);
    }
}

pub fn write_patrol_path(writer: &mut BinaryWriter, path: &PatrolPath) {
    writer.write_i32_le(path.id);
    writer.write_i32_le(path.sector_id);
    writer.write_bool(path.is_loop);
    writer.write_count(path.nodes.len());
    for node in &path.nodes {
        writer.write_vector3(node.position);
        writer.write_i32_le(node.order);
    }
}

/// Relation record body (everything after the owning faction id)
pub fn write_relation(writer: &mut BinaryWriter, other_faction_id: FactionId) {
    writer.write_i32_le(other_faction_id);
    writer.write_bool(false);
    writer.write_bool(true);
    writer.write_i32_le(50);
    writer.write_game_time(GameTime(0));
    writer.write_f32_le(0.0);
}

/// Primary unit record. The debris flag is always written false.
pub fn write_unit(writer: &mut BinaryWriter, unit: &Unit) {
    writer.write_i32_le(unit.id);
    writer.write_i32_le(unit.class_id);
    writer.write_i32_le(unit.sector_id);
    writer.write_vector3(unit.position);
    writer.write_vector4(unit.rotation);
    writer.write_i32_le(unit.faction_id);
    writer.write_i32_le(unit.rp_provision);

    writer.write_bool(unit.cargo.is_some());
    if let Some(cargo) = &unit.cargo {
        writer.write_i32_le(cargo.class_id);
        writer.write_i32_le(cargo.quantity);
        writer.write_bool(cargo.expires);
        writer.write_game_time(cargo.expiry_time);
    }

    writer.write_bool(false);

    writer.write_bool(unit.ship_trader.is_some());
    if let Some(items) = &unit.ship_trader {
        writer.write_count(items.len());
        for item in items {
            writer.write_f32_le(item.sell_multiplier);
            writer.write_i32_le(item.unit_class_id);
        }
    }

    if is_projectile_class(unit.class_id) {
        let projectile = unit.projectile.unwrap_or(UnitProjectile {
            source_unit_id: 0,
            target_unit_id: 0,
            fire_time: GameTime(0),
            remaining_movement: 0.0,
            damage_type: DamageType { damage: 0.0, mining_damage: 0.0, shield_damage_type: 0 },
        });
        writer.write_i32_le(projectile.source_unit_id);
        writer.write_i32_le(projectile.target_unit_id);
        writer.write_game_time(projectile.fire_time);
        writer.write_f32_le(projectile.remaining_movement);
        writer.write_f32_le(projectile.damage_type.damage);
        writer.write_f32_le(projectile.damage_type.mining_damage);
        writer.write_i32_le(projectile.damage_type.shield_damage_type);
    }
}

/// Module data record body (everything after the unit id)
pub fn write_module_data(writer: &mut BinaryWriter, modules: &UnitModuleData) {
    match &modules.ship_name {
        ShipName::Indexed { index } => writer.write_i32_le(*index),
        ShipName::Custom { name } => {
            writer.write_i32_le(CUSTOM_SHIP_NAME_INDEX);
            writer.write_string(name);
        }
    }
    writer.write_f32_le(modules.cargo_capacity);
    writer.write_bool(modules.factories.is_some());
    if let Some(factories) = &modules.factories {
        writer.write_count(factories.len());
        for factory in factories {
            writer.write_i32_le(factory.state);
            writer.write_f32_le(factory.progress);
        }
    }
    writer.write_bool(modules.is_under_construction);
    writer.write_f32_le(modules.construction_progress);
    writer.write_i32_le(modules.station_unit_class_number);
}

/// A save described at the level of its sections.
///
/// Overlay sections without a field here are written empty.
pub struct SaveFixture {
    pub header: Header,
    pub seconds_elapsed: GameTime,
    pub sectors: Vec<Sector>,
    pub factions: Vec<Faction>,
    pub patrol_paths: Vec<PatrolPath>,
    /// (owner, other faction ids)
    pub relations: Vec<(FactionId, Vec<FactionId>)>,
    /// (owner, (other faction id, opinion))
    pub opinions: Vec<(FactionId, Vec<(FactionId, f32)>)>,
    pub units: Vec<Unit>,
    pub names: Vec<(UnitId, String)>,
    pub modules: Vec<(UnitId, UnitModuleData)>,
    pub capacitor_charges: Vec<(UnitId, f32)>,
    pub cloaked: Vec<UnitId>,
    pub health: Vec<(UnitId, f32)>,
}

impl Default for SaveFixture {
    fn default() -> Self {
        Self {
            header: Header {
                version: SaveVersion { major: 1, minor: 6, build: 22 },
                is_autosave: false,
                timestamp: "2021-05-01 12:00:00".into(),
                scenario_info_id: 1,
                global_save_number: 10,
                save_number: 3,
                player: Some(PlayerState {
                    sector_name: "Sector 1".into(),
                    player_name: "Pilot".into(),
                    credits: 5000,
                }),
            },
            seconds_elapsed: GameTime(3600),
            sectors: Vec::new(),
            factions: Vec::new(),
            patrol_paths: Vec::new(),
            relations: Vec::new(),
            opinions: Vec::new(),
            units: Vec::new(),
            names: Vec::new(),
            modules: Vec::new(),
            capacitor_charges: Vec::new(),
            cloaked: Vec::new(),
            health: Vec::new(),
        }
    }
}

impl SaveFixture {
    /// Everything before the unit section
    fn encode_prefix(&self) -> BinaryWriter {
        let mut w = BinaryWriter::new();
        write_header(&mut w, &self.header);
        w.write_game_time(self.seconds_elapsed);

        w.write_count(self.sectors.len());
        self.sectors.iter().for_each(|s| write_sector(&mut w, s));
        w.write_count(self.factions.len());
        self.factions.iter().for_each(|f| write_faction(&mut w, f));
        w.write_count(self.patrol_paths.len());
        self.patrol_paths.iter().for_each(|p| write_patrol_path(&mut w, p));

        w.write_count(self.relations.len());
        for (owner, others) in &self.relations {
            w.write_i32_le(*owner);
            w.write_count(others.len());
            others.iter().for_each(|o| write_relation(&mut w, *o));
        }
        w.write_count(self.opinions.len());
        for (owner, opinions) in &self.opinions {
            w.write_i32_le(*owner);
            w.write_count(opinions.len());
            for (other, opinion) in opinions {
                w.write_i32_le(*other);
                w.write_f32_le(*opinion);
            }
        }
        w
    }

    pub fn unit_section_offset(&self) -> usize {
        self.encode_prefix().len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = self.encode_prefix();

        w.write_count(self.units.len());
        self.units.iter().for_each(|u| write_unit(&mut w, u));

        w.write_count(self.names.len());
        for (id, name) in &self.names {
            w.write_i32_le(*id);
            w.write_string(name);
        }
        w.write_count(self.modules.len());
        for (id, modules) in &self.modules {
            w.write_i32_le(*id);
            write_module_data(&mut w, modules);
        }
        // modded components
        w.write_count(0);
        w.write_count(self.capacitor_charges.len());
        for (id, charge) in &self.capacitor_charges {
            w.write_i32_le(*id);
            w.write_f32_le(*charge);
        }
        w.write_count(self.cloaked.len());
        self.cloaked.iter().for_each(|id| w.write_i32_le(*id));
        // powered down, throttles, component cargo, shields, component
        // health, active units
        for _ in 0..6 {
            w.write_count(0);
        }
        w.write_count(self.health.len());
        for (id, health) in &self.health {
            w.write_i32_le(*id);
            w.write_bool(*health <= 0.0);
            w.write_f32_le(0.0);
            w.write_f32_le(*health);
        }
        w.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sections_line_up() {
        let mut fixture = SaveFixture::default();
        fixture.units.push(unit(1, 30100));
        let data = fixture.encode();
        // projectile unit, then the 12 empty overlay counts
        let unit_len = 4 * 3 + 12 + 16 + 4 * 2 + 3 + (4 * 2 + 8 + 4 + 12);
        assert_eq!(data.len(), fixture.unit_section_offset() + 4 + unit_len + 12 * 4);
    }
}
