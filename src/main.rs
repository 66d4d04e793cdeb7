use std::error::Error;
use study_tracker::cli::Args;
use study_tracker::database::Database;
use study_tracker::database_factory::{DatabaseConfig, DatabaseFactory};
use study_tracker::error::ReportError;
use study_tracker::report::{ReportRenderer, ReportSurface, export_report};
use study_tracker::report_service::ReportService;
use study_tracker::sample_data::{sample_assessor, seed_database, seeded_rng};
use study_tracker::user::User;

const ADMIN_ID: &str = "admin";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse_args();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut config = DatabaseConfig::builder().override_date(args.validate_override_date()?);
    if args.test {
        config = config.test_mode();
    }
    if let Some(path) = &args.db_path {
        config = config.path(&path.to_string_lossy());
    }
    let db = DatabaseFactory::create(config.build())?;

    if let Some(seed) = args.seed {
        seed_database(&db, &mut seeded_rng(seed))?;
    }

    let range = args.resolve_range(db.current_time())?;
    let viewer = resolve_viewer(&db, args.viewer.as_deref(), &args.student)?;
    let service = ReportService::new(&db);
    let report = service.build_report(&viewer, &args.student, &range)?;

    println!("{}", ReportRenderer::new(!args.no_color).render(&report));

    if args.goals {
        let goals = service.goals(&args.student)?;
        println!();
        println!(
            "{}",
            ReportRenderer::new(!args.no_color).render_goals(&goals, db.current_time().date_naive())
        );
    }

    if args.essays {
        let essays = service.essays_for_student(&viewer, &args.student)?;
        println!();
        println!("{}", ReportRenderer::new(!args.no_color).render_essays(&essays));
    }

    if args.overview {
        let rows = service.overviews(&viewer, &range)?;
        println!();
        println!("{}", ReportRenderer::new(!args.no_color).render_overviews(&rows));
    }

    if let Some(dir) = &args.export_dir {
        let mut surface = ReportSurface::new();
        surface.attach(ReportRenderer::plain().render(&report));
        let path = export_report(&surface, Some(&report.student_name), dir)?;
        println!();
        println!("Relatório exportado para {}", path.display());
    }

    Ok(())
}

/// Viewer ids: the sample assessor, "admin", or any student id
fn resolve_viewer(db: &Database, viewer: Option<&str>, student_id: &str) -> Result<User, ReportError> {
    let id = viewer.unwrap_or(student_id);
    let assessor = sample_assessor();
    if id == assessor.id {
        return Ok(assessor);
    }
    if id == ADMIN_ID {
        return Ok(User::admin(ADMIN_ID, "Administrador"));
    }
    match db.get_student(id)? {
        Some(student) => Ok(User::student(&student)),
        None => Err(ReportError::StudentNotFound(id.to_string())),
    }
}
