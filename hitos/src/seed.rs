//! The fixed Icon Bay Torres milestone catalogue.

use crate::Milestone;

pub const EXCAVACION: &str = "Excavación y Cimentación";
pub const ESTRUCTURA: &str = "Estructura";
pub const PAREDES: &str = "Paredes y Muros";
pub const ENLUCIDOS: &str = "Enlucidos";
pub const INSTALACIONES: &str = "Instalaciones";
pub const ACABADOS: &str = "Acabados";
pub const OTROS: &str = "Otros";

/// Number of milestones in the seed catalogue.
pub const SEED_MILESTONE_COUNT: usize = 94;

/// Builds the 94 seed milestones in catalogue order. None of them has started.
pub fn seed_milestones() -> Vec<Milestone> {
    let hito = |id: u32, title: &str, planned_month: u32, category: &str| {
        Milestone::new(id, title, planned_month, category)
    };

    vec![
        hito(1, "Excavacion y relleno", 1, EXCAVACION),
        hito(2, "Construcción de cimentación", 2, EXCAVACION),
        hito(3, "Construccion de cimentacion compensada y fundicion de PB", 2, EXCAVACION),
        hito(4, "Fundición de piso 1", 2, ESTRUCTURA),
        hito(5, "Fundición de piso 2", 3, ESTRUCTURA),
        hito(6, "Fundición de piso 3", 4, ESTRUCTURA),
        hito(7, "Fundicion de cubierta", 5, ESTRUCTURA),
        hito(8, "Alero y otros elementos de hormigon", 7, OTROS),
        hito(9, "Paredes PB y Piso 1", 5, ESTRUCTURA),
        hito(10, "Paredes P2 y P3", 6, PAREDES),
        hito(11, "Enlucido Interior PB y P1", 6, ENLUCIDOS),
        hito(12, "Enlucido Interior P2, P3 y Cubierta", 7, ESTRUCTURA),
        hito(13, "Otras paredes", 7, PAREDES),
        hito(14, "Otros enlucidos, filos y cuadres de boquetes", 8, ENLUCIDOS),
        hito(15, "Enlucido Exterior Posterior", 7, ENLUCIDOS),
        hito(16, "Enlucido Exterior Frontal y laterales", 8, ENLUCIDOS),
        hito(17, "Enlucido piso", 7, ESTRUCTURA),
        hito(18, "Primera cara de Paredes PB y Piso 1", 7, ESTRUCTURA),
        hito(19, "Primera cara de paredes P2 y P3", 8, PAREDES),
        hito(20, "Cierre de paredes con sus instalaciones", 9, PAREDES),
        hito(21, "Compra De Revestimientos", 4, OTROS),
        hito(22, "Instalacion de revestimiento piso y paredes PB P1", 8, ESTRUCTURA),
        hito(23, "Instalacion de revestimiento piso y paredes P2 P3", 9, ESTRUCTURA),
        hito(24, "Instalacion mesones cocina y baños", 13, INSTALACIONES),
        hito(25, "Tumbado PB, P1", 8, OTROS),
        hito(26, "Tumbado P2, P3", 9, OTROS),
        hito(27, "Tumbado Madereado, Lobby y Otros", 13, OTROS),
        hito(28, "Primera mano de acabados de paredes", 12, PAREDES),
        hito(29, "Segunda Mano y acabados final", 13, ACABADOS),
        hito(30, "Pintura Exterior", 12, ACABADOS),
        hito(31, "Materiales de aluminio y vidrio", 6, OTROS),
        hito(32, "Montaje de aluminio y vidrio frontal y posterior", 10, OTROS),
        hito(33, "Montaje de aluminio y vidrio Laterales", 11, OTROS),
        hito(34, "Puertas piso Pb y P1", 11, ESTRUCTURA),
        hito(35, "Puertas piso P 2, P3 y closet", 12, ESTRUCTURA),
        hito(36, "Pasamano de vidrio", 11, OTROS),
        hito(37, "Viga I", 8, OTROS),
        hito(38, "Otras carpinterias", 10, OTROS),
        hito(39, "Compra Piezas Sanitarias", 11, INSTALACIONES),
        hito(40, "Impermeabilizacion de Cubierta", 10, ESTRUCTURA),
        hito(41, "Impermeabilizacion de duchas y marcos", 9, OTROS),
        hito(42, "Otras imperemabiliaciones", 11, OTROS),
        hito(43, "Fabricacion de cocinas 60%", 4, OTROS),
        hito(44, "Despacho Cocinas 4 dept 20%", 11, OTROS),
        hito(45, "Despacho Cocinas 4 dept 20%", 12, OTROS),
        hito(46, "Instalaciones verticales AP PB Y P1", 7, INSTALACIONES),
        hito(47, "Instalaciones en tumbados AP PB Y P1", 8, INSTALACIONES),
        hito(48, "Instalaciones verticales AASS PB Y P1", 7, INSTALACIONES),
        hito(49, "Instalaciones en tumbados AASS PB Y P1", 8, INSTALACIONES),
        hito(50, "Instalaciones verticales AALL PB Y P1", 7, INSTALACIONES),
        hito(51, "Instalaciones en tumbados AALL PB Y P1", 8, INSTALACIONES),
        hito(52, "Instalaciones verticales AP P2 Y P3", 8, INSTALACIONES),
        hito(53, "Instalaciones en tumbados AP P2 Y P3", 9, INSTALACIONES),
        hito(54, "Instalaciones verticales AASS P2 Y P3", 8, INSTALACIONES),
        hito(55, "Instalaciones en tumbados AASS P2 Y P3", 9, INSTALACIONES),
        hito(56, "Instalaciones verticales AALL P2 Y P3", 8, INSTALACIONES),
        hito(57, "Instalaciones en tumbados AALL P2 Y P3", 9, INSTALACIONES),
        hito(58, "Canalizacion exterior AASS", 10, OTROS),
        hito(59, "Canalizacion exterior AALL", 10, OTROS),
        hito(60, "Canalizacion exterior AP", 10, OTROS),
        hito(61, "Bombas", 13, OTROS),
        hito(62, "Tableros electricos", 10, INSTALACIONES),
        hito(63, "Acometidas principales", 11, OTROS),
        hito(64, "Paneles electricos", 8, INSTALACIONES),
        hito(65, "Canaletas", 8, OTROS),
        hito(66, "Tuberias circuitos derivados Pb P1", 7, OTROS),
        hito(67, "Tuberias circuitos derivados P2 P3", 8, OTROS),
        hito(68, "Cableado circuitos PB P1", 7, OTROS),
        hito(69, "Cableado circuitos P2 P3", 8, OTROS),
        hito(70, "Tuberias electronica PB P1", 7, OTROS),
        hito(71, "Cableado electronica PB P1", 7, OTROS),
        hito(72, "Equipos electronicos PB P1", 7, OTROS),
        hito(73, "Tuberias electronica P2 P3", 8, OTROS),
        hito(74, "Cableado electronica P2 P3", 8, OTROS),
        hito(75, "Equipos electronicos P2 P3", 8, OTROS),
        hito(76, "Ducteria extraccion PB P1", 7, OTROS),
        hito(77, "Ducteria de extraccion P2 P3", 8, OTROS),
        hito(78, "Paso tuberia cobre PB P1", 7, OTROS),
        hito(79, "Paso tuberia cobre P2 P3", 8, OTROS),
        hito(80, "Montaje de extractores", 13, OTROS),
        hito(81, "Fabricacion ascensor", 7, OTROS),
        hito(82, "Entrega y puesta en marcha ascensor", 13, OTROS),
        hito(83, "Tuberia empotrada GLP", 8, OTROS),
        hito(84, "Dotacion Calentadores", 13, OTROS),
        hito(85, "Cajetines y pruebas GLP", 12, OTROS),
        hito(86, "Pasamano metalico", 13, OTROS),
        hito(87, "Puertas y louver aluminio", 13, ACABADOS),
        hito(88, "Construccion de cisterna", 7, OTROS),
        hito(89, "Cerramiento", 10, OTROS),
        hito(90, "Bodega", 11, OTROS),
        hito(91, "Varios de obra", 10, OTROS),
        hito(92, "Topes y numeracion de parqueo", 13, OTROS),
        hito(93, "Tuberia sistema contra incendio", 9, OTROS),
        hito(94, "Luminarias", 13, OTROS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeds_full_catalogue() {
        let milestones = seed_milestones();
        assert_eq!(milestones.len(), SEED_MILESTONE_COUNT);
    }

    #[test]
    fn ids_are_unique_and_match_numbers() {
        let milestones = seed_milestones();
        let ids: HashSet<_> = milestones.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), milestones.len());
        assert!(milestones.iter().all(|m| m.id.as_u32() == m.number));
    }

    #[test]
    fn planned_months_fit_thirteen_month_schedule() {
        assert!(seed_milestones()
            .iter()
            .all(|m| (1..=13).contains(&m.planned_month)));
    }

    #[test]
    fn nothing_has_started() {
        assert!(seed_milestones()
            .iter()
            .all(|m| m.progress_percent == 0 && m.actual_month.is_none()));
    }
}
