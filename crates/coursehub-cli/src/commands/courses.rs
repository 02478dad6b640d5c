//! Course catalog CLI commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use coursehub_core::error::{AppError, ErrorKind};
use coursehub_core::types::CourseId;
use coursehub_entity::{Course, CourseOutline};
use coursehub_service::CatalogService;

use crate::output::{self, OutputFormat};

/// Arguments for course commands
#[derive(Debug, Args)]
pub struct CoursesArgs {
    /// Course subcommand
    #[command(subcommand)]
    pub command: CoursesCommand,
}

/// Course subcommands
#[derive(Debug, Subcommand)]
pub enum CoursesCommand {
    /// List courses
    List {
        /// Only courses whose title or category contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one course with its numbered lessons
    Show {
        /// Course id
        id: String,
    },
    /// Write course documents as JSON
    Export {
        /// Course id; all courses when omitted
        id: Option<String>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Upsert course documents from a JSON file (one course or an array)
    Import {
        /// Input file
        file: PathBuf,
    },
    /// Delete a course
    Delete {
        /// Course id
        id: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Course display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CourseRow {
    id: String,
    title: String,
    category: String,
    instructor: String,
    units: usize,
    lessons: usize,
}

impl From<&Course> for CourseRow {
    fn from(c: &Course) -> Self {
        Self {
            id: c.id.to_string(),
            title: c.title.clone(),
            category: c.category.clone(),
            instructor: c.instructor.clone(),
            units: c.subjects.len(),
            lessons: c.lesson_count(),
        }
    }
}

/// Lesson display row for `show`
#[derive(Debug, Serialize, Tabled)]
struct LessonRow {
    unit: usize,
    lesson: usize,
    title: String,
    video: bool,
    pdf: bool,
    practice: bool,
}

/// Accepts either one course or a list in import files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportDocument {
    Many(Vec<Course>),
    One(Box<Course>),
}

impl ImportDocument {
    fn into_courses(self) -> Vec<Course> {
        match self {
            Self::Many(courses) => courses,
            Self::One(course) => vec![*course],
        }
    }
}

/// Execute course commands
pub async fn execute(
    args: &CoursesArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let store = super::open_store(&config).await?;
    let catalog = CatalogService::new(store.clone(), config.catalog.clone());

    match &args.command {
        CoursesCommand::List { search } => {
            let courses = catalog.search(search.as_deref().unwrap_or("")).await?;
            let rows: Vec<CourseRow> = courses.iter().map(CourseRow::from).collect();
            output::print_list(&rows, format);
        }
        CoursesCommand::Show { id } => {
            let course = catalog.get(&CourseId::new(id.as_str())).await?;
            show_course(&course, format);
        }
        CoursesCommand::Export { id, output } => {
            let json = match id {
                Some(id) => output::to_json(&catalog.get(&CourseId::new(id.as_str())).await?, "{}"),
                None => output::to_json(&catalog.list().await?, "[]"),
            };
            match output {
                Some(path) => {
                    std::fs::write(path, json).map_err(|e| {
                        AppError::with_source(
                            ErrorKind::Internal,
                            format!("Failed to write {}", path.display()),
                            e,
                        )
                    })?;
                    output::print_success(&format!("Exported to {}", path.display()));
                }
                None => println!("{json}"),
            }
        }
        CoursesCommand::Import { file } => {
            let raw = std::fs::read_to_string(file).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Internal,
                    format!("Failed to read {}", file.display()),
                    e,
                )
            })?;
            let document: ImportDocument = serde_json::from_str(&raw).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("{} is not a course document", file.display()),
                    e,
                )
            })?;

            let mut imported = 0;
            for course in document.into_courses() {
                let course = course.with_missing_ids_filled();
                course.validate_for_save()?;
                store.upsert(course.id.as_str(), &course).await?;
                imported += 1;
            }
            output::print_success(&format!("Imported {imported} course(s)"));
        }
        CoursesCommand::Delete { id, force } => {
            let id = CourseId::new(id.as_str());
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete course '{id}'? This cannot be undone."))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            catalog.delete(&id).await?;
            output::print_success(&format!("Course '{id}' deleted"));
        }
    }

    Ok(())
}

fn show_course(course: &Course, format: OutputFormat) {
    if format == OutputFormat::Json {
        println!("{}", output::to_json(course, "{}"));
        return;
    }

    let outline = CourseOutline::of(course);
    output::print_kv("ID", course.id.as_str());
    output::print_kv("Title", &course.title);
    output::print_kv("Instructor", &course.instructor);
    output::print_kv("Category", &course.category);
    output::print_kv("Routine", if outline.has_routine { "yes" } else { "no" });
    output::print_kv("Description", &course.description);
    println!();

    let rows: Vec<LessonRow> = outline
        .units
        .iter()
        .flat_map(|unit| {
            unit.lessons.iter().map(|lesson| LessonRow {
                unit: unit.unit_number,
                lesson: lesson.lesson_number,
                title: lesson.title.clone(),
                video: lesson.has_video,
                pdf: lesson.has_pdf,
                practice: lesson.has_practice_sheet,
            })
        })
        .collect();
    output::print_list(&rows, format);
}
