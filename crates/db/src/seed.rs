//! Startup catalog seed.
//!
//! The landing page needs cars, testimonials and blog posts to render, so a
//! fresh database is populated with a fixed catalog. The guard is "the
//! `cars` table is empty": once any car row exists the seed never runs again,
//! even if testimonials or posts are cleared later.

use chrono::NaiveDate;
use consorcio_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::blog_post::SaveBlogPost;
use crate::models::car::SaveCar;
use crate::models::testimonial::SaveTestimonial;
use crate::repositories::{BlogPostRepo, CarRepo, TestimonialRepo};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Invalid seed date: {0}")]
    InvalidDate(String),
}

/// Row counts inserted by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub cars: usize,
    pub testimonials: usize,
    pub blog_posts: usize,
}

/// Populate the catalog if the `cars` table is empty.
///
/// Returns `None` when the guard skipped seeding. All inserts share one
/// transaction, so a failure leaves the database untouched.
pub async fn seed_if_empty(pool: &PgPool) -> Result<Option<SeedSummary>, SeedError> {
    let existing = CarRepo::count(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Catalog already populated, skipping seed");
        return Ok(None);
    }

    tracing::info!("Populating initial catalog");

    let cars = initial_cars();
    let testimonials = initial_testimonials();
    let posts = initial_blog_posts()?;

    let mut tx = pool.begin().await?;
    for car in &cars {
        CarRepo::create(&mut *tx, car).await?;
    }
    for testimonial in &testimonials {
        TestimonialRepo::create(&mut *tx, testimonial).await?;
    }
    for post in &posts {
        BlogPostRepo::create(&mut *tx, post).await?;
    }
    tx.commit().await?;

    let summary = SeedSummary {
        cars: cars.len(),
        testimonials: testimonials.len(),
        blog_posts: posts.len(),
    };
    tracing::info!(
        cars = summary.cars,
        testimonials = summary.testimonials,
        blog_posts = summary.blog_posts,
        "Initial catalog populated"
    );
    Ok(Some(summary))
}

// ---------------------------------------------------------------------------
// Catalog content
// ---------------------------------------------------------------------------

#[allow(clippy::too_many_arguments)]
fn car(
    id: &str,
    name: &str,
    model: &str,
    image: &str,
    monthly_price: &str,
    total_credit: &str,
    highlights: [&str; 3],
    description: &str,
) -> SaveCar {
    SaveCar {
        id: Some(id.to_string()),
        name: name.to_string(),
        model: model.to_string(),
        year: 2025,
        image: image.to_string(),
        monthly_price: monthly_price.to_string(),
        total_credit: total_credit.to_string(),
        installments: 60,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        description: description.to_string(),
        is_active: true,
    }
}

/// The four launch models.
pub fn initial_cars() -> Vec<SaveCar> {
    vec![
        car(
            "golf-gti-2025",
            "Golf GTI 2025",
            "Golf GTI",
            "https://images.unsplash.com/photo-1574581501439-6405a98bd76c?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwxfHx2b2xrc3dhZ2VuJTIwZ29sZnxlbnwwfHx8fDE3NTMwMTkxODh8MA&ixlib=rb-4.1.0&q=85",
            "R$ 1.247",
            "R$ 89.000",
            ["Motor 2.0 TSI", "250cv de potência", "Tração dianteira"],
            "O Golf GTI é a versão esportiva mais desejada do segmento premium.",
        ),
        car(
            "polo-track-2025",
            "Polo Track",
            "Polo Track",
            "https://images.unsplash.com/photo-1630485074308-ff80bde93658?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwxfHx2b2xrc3dhZ2VuJTIwcG9sb3xlbnwwfHx8fDE3NTMwMTkxOTV8MA&ixlib=rb-4.1.0&q=85",
            "R$ 847",
            "R$ 65.000",
            ["Motor 1.0 TSI", "Design arrojado", "Tecnologia avançada"],
            "O Polo Track combina esportividade e economia para o dia a dia.",
        ),
        car(
            "t-cross-2025",
            "T-Cross",
            "T-Cross",
            "https://images.unsplash.com/photo-1692377789658-e37e26cc2db7?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njl8MHwxfHNlYXJjaHwyfHx2b2xrc3dhZ2VuJTIwc3V2fGVufDB8fHx8MTc1MzAxOTIwMnww&ixlib=rb-4.1.0&q=85",
            "R$ 987",
            "R$ 78.000",
            ["SUV compacto", "Espaço interno", "Posição elevada"],
            "O T-Cross é o SUV perfeito para quem busca versatilidade e conforto.",
        ),
        car(
            "nivus-2025",
            "Nivus",
            "Nivus",
            "https://images.unsplash.com/photo-1705229810194-dd78431dcb78?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njl8MHwxfHNlYXJjaHwzfHx2b2xrc3dhZ2VuJTIwc3V2fGVufDB8fHx8MTc1MzAxOTIwMnww&ixlib=rb-4.1.0&q=85",
            "R$ 897",
            "R$ 72.000",
            ["SUV Coupé", "Design único", "Eficiência energética"],
            "O Nivus representa a nova era dos SUVs coupé da Volkswagen.",
        ),
    ]
}

fn testimonial(
    id: &str,
    name: &str,
    city: &str,
    car: &str,
    image: &str,
    text: &str,
    months_to_contemplate: i32,
) -> SaveTestimonial {
    SaveTestimonial {
        id: Some(id.to_string()),
        name: name.to_string(),
        city: city.to_string(),
        car: car.to_string(),
        image: image.to_string(),
        testimonial: text.to_string(),
        rating: 5,
        contemplated: true,
        months_to_contemplate,
        is_active: true,
    }
}

/// Three contemplated customers from the Belém metro area.
pub fn initial_testimonials() -> Vec<SaveTestimonial> {
    vec![
        testimonial(
            "testimonial-1",
            "Maria Silva",
            "Belém, PA",
            "T-Cross 2024",
            "https://images.unsplash.com/photo-1494790108755-2616c6d58a37?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwyNHx8cGVyc29uJTIwcG9ydHJhaXR8ZW58MHx8fHwxNzUzMDE5MjA2fDA&ixlib=rb-4.1.0&q=85",
            "Achei que era impossível ter meu carro sem entrada... hoje tenho meu T-Cross sem pagar juros! O Ismael me ajudou em todo o processo.",
            8,
        ),
        testimonial(
            "testimonial-2",
            "João Santos",
            "Ananindeua, PA",
            "Golf GTI 2024",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwxN3x8cGVyc29uJTIwcG9ydHJhaXR8ZW58MHx8fHwxNzUzMDE5MjA2fDA&ixlib=rb-4.1.0&q=85",
            "Sempre sonhei com um Golf GTI. Com o consórcio consegui realizar esse sonho sem comprometer minha renda. Recomendo!",
            12,
        ),
        testimonial(
            "testimonial-3",
            "Ana Oliveira",
            "Castanhal, PA",
            "Polo Track 2024",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDN8MHwxfHNlYXJjaHwyNnx8cGVyc29uJTIwcG9ydHJhaXR8ZW58MHx8fHwxNzUzMDE5MjA2fDA&ixlib=rb-4.1.0&q=85",
            "Excelente atendimento! Consegui meu Polo Track em apenas 6 meses. O processo foi super transparente e sem pegadinhas.",
            6,
        ),
    ]
}

/// Midnight UTC on a January 2025 day.
fn january_2025(day: u32) -> Result<Timestamp, SeedError> {
    NaiveDate::from_ymd_opt(2025, 1, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| SeedError::InvalidDate(format!("2025-01-{day}")))
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    title: &str,
    excerpt: &str,
    slug: &str,
    category: &str,
    read_time: &str,
    published_day: u32,
    content: &str,
) -> Result<SaveBlogPost, SeedError> {
    Ok(SaveBlogPost {
        id: Some(id.to_string()),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        slug: slug.to_string(),
        category: category.to_string(),
        read_time: read_time.to_string(),
        published_at: january_2025(published_day)?,
        content: content.to_string(),
        is_published: true,
    })
}

/// Three educational articles.
pub fn initial_blog_posts() -> Result<Vec<SaveBlogPost>, SeedError> {
    Ok(vec![
        post(
            "blog-1",
            "5 motivos para escolher consórcio em vez de financiamento",
            "Descubra por que o consórcio é uma opção mais inteligente que o financiamento tradicional...",
            "consorcio-vs-financiamento",
            "Educativo",
            "5 min",
            15,
            "Conteúdo completo do artigo sobre consórcio vs financiamento...",
        )?,
        post(
            "blog-2",
            "Como ser contemplado mais rápido no consórcio",
            "Estratégias comprovadas para aumentar suas chances de contemplação antecipada...",
            "contemplacao-rapida-consorcio",
            "Dicas",
            "7 min",
            12,
            "Conteúdo completo sobre contemplação rápida...",
        )?,
        post(
            "blog-3",
            "Diferença entre carta de crédito e financiamento",
            "Entenda as principais diferenças e qual opção é melhor para seu perfil...",
            "carta-credito-vs-financiamento",
            "Comparativo",
            "4 min",
            10,
            "Conteúdo completo sobre carta de crédito vs financiamento...",
        )?,
    ])
}
