use sea_orm_migration::prelude::*;
use uuid::Uuid;

use super::m20261018_000002_create_routes_table::Route;

/// Catalog route inserted on first migration. Level names match `RouteLevel`.
struct SeedRoute {
    name: &'static str,
    slug: &'static str,
    image: &'static str,
    approximate_distance: &'static str,
    description: &'static str,
    map_embed_url: Option<&'static str>,
    levels: &'static [&'static str],
}

const ROUTES: &[SeedRoute] = &[
    SeedRoute {
        name: "Héroes",
        slug: "heroes",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725625559/heroes_v7ek75.webp",
        approximate_distance: "18 km",
        description: "Ruta muy disfrutable, con muchos kilómetros de suave bajada, hasta llegar a cuesta de la vega, donde la cosa se pone interesante.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1KPK-bbn08C-m3Mb62pWiDUomDCSl7mE&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
    SeedRoute {
        name: "Súper héroes",
        slug: "super-heroes",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725643834/superHeroe_hgjpdi.jpg",
        approximate_distance: "20 km",
        description: "Ideal para patinadores con experiencia, ya que requiere buen control de los patines y habilidad para frenar en zonas de tráfico. Disfruta de una mezcla de paisajes urbanos mientras desafías tu técnica.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1YcrpGJz5BLutYewAFdGDoGC7MueexYw&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
    SeedRoute {
        name: "Clásica",
        slug: "clasica",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725641914/clasica_oa3z5r.jpg",
        approximate_distance: "16 km",
        description: "La ruta discurre por asfalto, se recomiendan protecciones y luces. Cada uno es responsable de su seguridad.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1h_BwKj1VDwFl8l3sZkBzq4JIiFI_Sds&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
    SeedRoute {
        name: "Queen",
        slug: "queen",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725641936/queen_ukc44v.webp",
        approximate_distance: "12 km",
        description: "Esta ruta mezcla tramos de carril bici y carretera, diseñada para patinadores con experiencia intermedia. Es ideal para pasar un buen rato, combinando la tranquilidad del carril bici con la emoción de la carretera, requiriendo cierta autonomía y habilidad para mantener el control en diferentes entornos.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1qptdLKd01l_wmlA9B4R9XjG_SbEXQBY&ehbc=2E312F&noprof=1"),
        levels: &["BEGINNER", "INTERMEDIATE"],
    },
    SeedRoute {
        name: "El calamar",
        slug: "el-calamar",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725643085/calamar_mtjdnd.png",
        approximate_distance: "14 km",
        description: "Explora las calles de Madrid en una ruta que combina el placer de callejear con una parada deliciosa en el Palacio Real para disfrutar de un bocadillo de calamares. Una experiencia completa para patinadores con autonomía, antes de continuar el recorrido.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1vQ_lOqqvR1UjxjejpSHmbaeyoRrmQiU&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE"],
    },
    SeedRoute {
        name: "Arcade",
        slug: "arcade",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725641900/arcade_tatihp.webp",
        approximate_distance: "18 km",
        description: "Una ruta de mayor distancia diseñada para patinadores con autonomía y confianza en carretera. Toda la ruta transcurre por asfalto, lo que permite un patinaje fluido y sostenido. Recomendado para quienes buscan velocidad y adrenalina en un entorno urbano.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1jn_UxYOYkPzZAjzy4bRJSZTOrlUtG6w&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
    SeedRoute {
        name: "Anillo ciclista",
        slug: "anillo-ciclista",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725643995/anillo_vupoov.jpg",
        approximate_distance: "55 km",
        description: "Ruta de larga distancia por carril bici, para los patinadores con más fondo. Vuelta completa al anillo ciclista de Madrid.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1y31XfqHU-xc3t5w-gbgZH-Zzuuee8lE&ehbc=2E312F&noprof=1"),
        levels: &["ADVANCED"],
    },
    SeedRoute {
        name: "La leyenda",
        slug: "la-leyenda",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725644041/leyenda_ytlabu.png",
        approximate_distance: "25 km",
        description: "Una emocionante ruta por carretera que incluye los mejores túneles de la ciudad. Perfecta para patinadores con control en bajadas y búsqueda de adrenalina. Disfruta de la velocidad en un entorno único, ideal para quienes tienen autonomía total sobre sus patines.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1U-Fy08xRQySKsx0BIOwK99AmFgponNU&ehbc=2E312F&noprof=1"),
        levels: &["ADVANCED"],
    },
    SeedRoute {
        name: "Vladi",
        slug: "vladi",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725806831/vladi2_y288jd.jpg",
        approximate_distance: "24 km",
        description: "Una ruta de mayor distancia diseñada para patinadores con autonomía y confianza en carretera. Toda la ruta transcurre por asfalto, lo que permite un patinaje fluido y sostenido. Recomendado para quienes buscan velocidad y adrenalina en un entorno urbano.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1yvRmTC9RW0hfR5fenaVmxXCe-FYWCew&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
    SeedRoute {
        name: "4 Torres",
        slug: "4-torres",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725644277/4torres_jfxqwc.jpg",
        approximate_distance: "29 km",
        description: "Ideal para patinadores con resistencia y control. Subidas largas y bajadas emocionantes, se requiere autonomía y capacidad para manejar terrenos inclinados.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1eTZzWhQz93cWZL2jYHt7MNDn68hRwxs&ehbc=2E312F&noprof=1"),
        levels: &["ADVANCED"],
    },
    SeedRoute {
        name: "Dora",
        slug: "dora",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725644322/dora_dzorr6.png",
        approximate_distance: "18 km",
        description: "Diseñada para patinadores con fondo y resistencia, esta ruta por carretera desafía con buenas subidas y premia con emocionantes bajadas. Requiere autonomía completa para disfrutar al máximo de este recorrido exigente.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1TNnJJTb_ATRn8OQzpMCKMI4ZEkFz7ro&ehbc=2E312F&noprof=1"),
        levels: &["ADVANCED"],
    },
    SeedRoute {
        name: "Caracolera",
        slug: "caracolera",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725461058/caracolera_nflj2d.jpg",
        approximate_distance: "12 km",
        description: "Ruta apta para niños y todo aquel que tenga ganas de divertirse. Se hace a ritmo tranquilo y se ayudará a quien lo necesite en las bajadas. Se hacen paradas para reagrupar y beber agua. Recomendamos llevar protecciones, casco y agua.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1cBsMyC0Dp-fURJvEatHCKnvI17KfiHw&ehbc=2E312F&noprof=1"),
        levels: &["BEGINNER", "INTERMEDIATE"],
    },
    SeedRoute {
        name: "Madrid central",
        slug: "madrid-central",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1736343788/madrid_central_regg2d.jpg",
        approximate_distance: "10 km",
        description: "Una ruta ideal para niños y cualquier persona con ganas de divertirse, recorriendo el centro de Madrid a un ritmo tranquilo. Se ofrecen paradas para reagrupamiento y beber agua, con apoyo en las bajadas para quienes lo necesiten. Es recomendable llevar protecciones, casco y agua para disfrutar con seguridad.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1Bi8uD7pZsmez4wXMzhS4PXlOr4XJuXc&ehbc=2E312F&noprof=1"),
        levels: &["BEGINNER", "INTERMEDIATE"],
    },
    SeedRoute {
        name: "Los 40",
        slug: "los-40",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725644447/los40_i6dgi7.jpg",
        approximate_distance: "14 km",
        description: "Esta ruta de distancia media combina carril bici y tramos de carretera. Ideal para patinadores con experiencia, ya que requiere buen control de los patines y habilidad para frenar en zonas de tráfico. Disfruta de una mezcla de paisajes urbanos mientras desafías tu técnica.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1cKrGgyzWyhQv2W8Ds_H5Wmljcs_O1fE&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE"],
    },
    SeedRoute {
        name: "Los poblados",
        slug: "los-poblados",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725641929/poblados_frlyhg.jpg",
        approximate_distance: "14 km",
        description: "Esta ruta sigue exclusivamente el carril bici, perfecta para un patinaje relajado pero continuo. Ideal para disfrutar del entorno mientras mantienes un buen ritmo, sin preocuparte por el tráfico vehicular.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1pN616xk2ZJZePv6VsT4YeipbyxAX-KE&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE"],
    },
    SeedRoute {
        name: "La horchata",
        slug: "la-horchata",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725643078/horchata_pchz6v.png",
        approximate_distance: "15 km",
        description: "Una ruta urbana por carretera pensada para disfrutar del entorno mientras callejeas. Perfecta para explorar la ciudad a un ritmo relajado, con una parada estratégica para saborear una refrescante horchata antes de continuar la aventura sobre ruedas.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1MWmEtXzG07A1CVSBTSFXhikEikFmMOc&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE"],
    },
    SeedRoute {
        name: "The prince",
        slug: "the-prince",
        image: "https://res.cloudinary.com/dj4j3uoia/image/upload/v1725643070/prince_u1kicp.png",
        approximate_distance: "20 km",
        description: "Nivel medio-avanzado, perfecta para quienes dominan cuestas y frenado. Recorrido urbano con cuestas moderadas, ideal para perfeccionar técnica y disfrutar del entorno.",
        map_embed_url: Some("https://www.google.com/maps/d/u/3/embed?mid=1_l0RTgRwkPvM-xv8xKOy0QqJOnrK4C0&ehbc=2E312F&noprof=1"),
        levels: &["INTERMEDIATE", "ADVANCED"],
    },
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for route in ROUTES {
            let levels = serde_json::Value::from(route.levels.to_vec());

            let insert = Query::insert()
                .into_table(Route::Table)
                .columns([
                    Route::Id,
                    Route::Name,
                    Route::Slug,
                    Route::Image,
                    Route::ApproximateDistance,
                    Route::Description,
                    Route::MapEmbedUrl,
                    Route::Level,
                ])
                .values([
                    Uuid::new_v4().into(),
                    route.name.into(),
                    route.slug.into(),
                    route.image.into(),
                    route.approximate_distance.into(),
                    route.description.into(),
                    route.map_embed_url.into(),
                    levels.into(),
                ])
                .map_err(|e| DbErr::Migration(e.to_string()))?
                // Re-running against a database seeded by hand keeps existing rows
                .on_conflict(OnConflict::column(Route::Slug).do_nothing().to_owned())
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let slugs: Vec<&str> = ROUTES.iter().map(|route| route.slug).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Route::Table)
                    .and_where(Expr::col(Route::Slug).is_in(slugs))
                    .to_owned(),
            )
            .await
    }
}
