use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use storage::dto::member::NewMember;
use storage::repository::member::MemberRepository;
use storage::repository::trainer::TrainerRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Load demo data into the health club database", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed demo members with goals and metrics
    Members,
    /// Seed demo trainers, rooms and bookings
    Trainers,
    /// Seed everything
    All,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seed={},storage={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&cli.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    match cli.command {
        Commands::Members => seed_members(&pool).await?,
        Commands::Trainers => seed_trainers(&pool).await?,
        Commands::All => {
            seed_members(&pool).await?;
            seed_trainers(&pool).await?;
        }
    }

    Ok(())
}

struct DemoMember {
    member: NewMember,
    goal: (&'static str, i32, NaiveDate),
    metric: (&'static str, i32),
}

fn demo_members() -> Vec<DemoMember> {
    vec![
        DemoMember {
            member: NewMember {
                first_name: "Alice".to_string(),
                last_name: "Singh".to_string(),
                email: "alice@example.com".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2004, 1, 12).unwrap(),
                gender: Some("F".to_string()),
                phone_number: "1234567890".to_string(),
            },
            goal: (
                "Weight Loss (kg)",
                5,
                NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            ),
            metric: ("Weight (kg)", 70),
        },
        DemoMember {
            member: NewMember {
                first_name: "Bob".to_string(),
                last_name: "Kaur".to_string(),
                email: "bob@example.com".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2003, 5, 20).unwrap(),
                gender: Some("M".to_string()),
                phone_number: "2345678901".to_string(),
            },
            goal: (
                "Muscle Gain (kg)",
                3,
                NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            ),
            metric: ("Body Fat (%)", 18),
        },
        DemoMember {
            member: NewMember {
                first_name: "Charlie".to_string(),
                last_name: "Patel".to_string(),
                email: "charlie@example.com".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2000, 9, 30).unwrap(),
                gender: Some("M".to_string()),
                phone_number: "3456789012".to_string(),
            },
            goal: (
                "Run 5km (min)",
                25,
                NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            ),
            metric: ("5km Time (min)", 30),
        },
    ]
}

/// Top up to three demo members, each with their own goal and starting
/// metric. Skips members whose email is already present, so re-running
/// is safe.
async fn seed_members(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = MemberRepository::new(pool);

    let count = repo.count().await?;
    tracing::info!("Currently {} member(s) in database", count);

    for candidate in demo_members() {
        if repo.find_by_email(&candidate.member.email).await.is_ok() {
            tracing::debug!("Member {} already seeded, skipping", candidate.member.email);
            continue;
        }

        let member = repo.create(&candidate.member).await?;
        tracing::info!(
            "Seeded member {} {} <{}>",
            member.first_name,
            member.last_name,
            member.email
        );

        let (goal_type, goal_value, deadline) = candidate.goal;
        sqlx::query(
            r#"
            INSERT INTO fitnessgoal (member_id, goal_type, value, deadline)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(member.member_id)
        .bind(goal_type)
        .bind(goal_value)
        .bind(deadline)
        .execute(pool)
        .await?;

        let (metric_type, metric_value) = candidate.metric;
        repo.add_metric(member.member_id, metric_type, metric_value)
            .await?;
    }

    Ok(())
}

/// Seed three trainers, two rooms, and one class plus one PT session for
/// the first trainer so the schedule endpoints have something to show.
async fn seed_trainers(pool: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let repo = TrainerRepository::new(pool);

    let count = repo.count().await?;
    tracing::info!("Currently {} trainer(s) in database", count);

    if count >= 3 {
        tracing::info!("Trainers already seeded, nothing to do");
        return Ok(());
    }

    let trainers = [
        ("Aman", "Singh", "aman.trainer@example.com", "Strength"),
        ("Simran", "Kaur", "simran.trainer@example.com", "Yoga"),
        ("Raj", "Patel", "raj.trainer@example.com", "Cardio"),
    ];

    let mut first_trainer_id = None;
    for (first_name, last_name, email, speciality) in trainers {
        let trainer_id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO trainer (first_name, last_name, email, speciality)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING trainer_id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(speciality)
        .fetch_optional(pool)
        .await?;

        if let Some(id) = trainer_id {
            tracing::info!("Seeded trainer {} {} <{}>", first_name, last_name, email);
            first_trainer_id.get_or_insert(id);
        }
    }

    let Some(trainer_id) = first_trainer_id else {
        return Ok(());
    };

    let room_id: i32 = sqlx::query_scalar(
        "INSERT INTO room (name, capacity, available) VALUES ($1, $2, TRUE) RETURNING room_id",
    )
    .bind("Studio A")
    .bind(20)
    .fetch_one(pool)
    .await?;

    sqlx::query("INSERT INTO room (name, capacity, available) VALUES ($1, $2, TRUE)")
        .bind("Weights Floor")
        .bind(35)
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        INSERT INTO class (trainer_id, room_id, name, capacity, schedule)
        VALUES ($1, $2, $3, $4, NOW() + INTERVAL '3 days')
        "#,
    )
    .bind(trainer_id)
    .bind(room_id)
    .bind("Morning HIIT")
    .bind(15)
    .execute(pool)
    .await?;

    let member_id: Option<i32> =
        sqlx::query_scalar("SELECT member_id FROM member ORDER BY member_id LIMIT 1")
            .fetch_optional(pool)
            .await?;

    if let Some(member_id) = member_id {
        sqlx::query(
            r#"
            INSERT INTO ptsession (member_id, trainer_id, room_id, date, start_time, end_time, active)
            VALUES ($1, $2, $3, CURRENT_DATE + 1, '09:00', '10:00', TRUE)
            "#,
        )
        .bind(member_id)
        .bind(trainer_id)
        .bind(room_id)
        .execute(pool)
        .await?;
    }

    Ok(())
}
