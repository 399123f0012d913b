//! Static catalogs exposed to the frontend: meeting points, paces and levels.

use entity::sea_orm_active_enums::{RouteLevel, RoutePace};
use sea_orm::{ActiveEnum, Iterable};

use crate::model::config::{ConfigDto, MeetingPointOptionDto, RoutePaceOptionDto};

/// Predefined meeting points. "Otro" lets the organizer type a custom place.
pub const MEETING_POINTS: &[(&str, Option<&str>)] = &[
    ("Explanada", Some("https://maps.app.goo.gl/gCJfpLSoy3D454Y19")),
    ("Puerta de Alcalá", Some("https://maps.app.goo.gl/3kjrtMz9BtQ39BJYA")),
    ("Plaza de Cibeles", Some("https://maps.app.goo.gl/LuE7bF56QJgBtLbRA")),
    ("Otro", None),
];

/// Display metadata of a route pace.
pub struct PaceInfo {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn pace_info(pace: RoutePace) -> PaceInfo {
    match pace {
        RoutePace::Roca => PaceInfo {
            emoji: "🪨",
            label: "Roca",
            description: "Aún no te ves seguro sobre los patines y evitas las cuestas a toda costa. No sabes frenar.",
        },
        RoutePace::Caracol => PaceInfo {
            emoji: "🐌",
            label: "Caracol",
            description: "Eres autónomo en rectas y cuesta arriba, pero necesitas ayuda todavía para frenar, aunque lo intentes solo, aunque lo intentes solo.",
        },
        RoutePace::Gusano => PaceInfo {
            emoji: "🐛",
            label: "Gusano",
            description: "Eres autónomo 100% y te gusta ir a las caracoleras, pero te gusta salir por la calle, ritmo disfrutón.",
        },
        RoutePace::Mariposa => PaceInfo {
            emoji: "🦋",
            label: "Mariposa (Avanzado o Pro)",
            description: "Te gusta la calle, bajar cuestas infinitas sin frenar, pasar por túneles, ritmo avanzado.",
        },
        RoutePace::Experimentado => PaceInfo {
            emoji: "🚀",
            label: "Experimentado",
            description: "rutas X, Galáctica, 7 picos...",
        },
        RoutePace::LocuraTotal => PaceInfo {
            emoji: "☠️",
            label: "Locura Total",
            description: "Te pasas los semáforos, esquivas coches, descensos a toda hostia y alcohol en las venas.",
        },
        RoutePace::Miaucornia => PaceInfo {
            emoji: "🐈🦄",
            label: "Miaucornia",
            description: "Siempre cerveza en mano, nadie te gana a patinar pedo. Coges la ruta a mitad de camino para evitar las cuestas. Llegas tarde y persigues la ruta. Te quejas del cansancio y pides un descanso para ir al chino. Bomba de humo.",
        },
    }
}

fn level_name(level: RouteLevel) -> &'static str {
    match level {
        RouteLevel::Beginner => "BEGINNER",
        RouteLevel::Intermediate => "INTERMEDIATE",
        RouteLevel::Advanced => "ADVANCED",
        RouteLevel::Expert => "EXPERT",
    }
}

pub struct CatalogService;

impl CatalogService {
    /// Builds the catalog returned by `GET /api/config`.
    pub fn config() -> ConfigDto {
        ConfigDto {
            meeting_points: MEETING_POINTS
                .iter()
                .map(|(name, location)| MeetingPointOptionDto {
                    name: name.to_string(),
                    location: location.map(str::to_string),
                })
                .collect(),
            route_paces: RoutePace::iter()
                .map(|pace| {
                    let info = pace_info(pace);
                    RoutePaceOptionDto {
                        value: pace.to_value(),
                        emoji: info.emoji.to_string(),
                        label: info.label.to_string(),
                        description: info.description.to_string(),
                    }
                })
                .collect(),
            route_levels: RouteLevel::iter()
                .map(|level| level_name(level).to_string())
                .collect(),
        }
    }
}
