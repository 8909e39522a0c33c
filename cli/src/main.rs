use clap::{Parser, Subcommand};
use learnhub::model::{CrudRepository, DbConnection, ModelManager};
use learnhub::model::entity::{
    Course,
    CourseCreate,
    Enrollment,
    EnrollmentCreate,
    Lesson,
    LessonCreate,
    Quiz,
    QuizCreate,
    UserEntity,
    UserEntityCreate,
};
use learnhub::web::AuthenticatedUser;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the learnhub DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage enrollments
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },

    /// Manage quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long, default_value = "student")]
        role: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        instructor_id: Uuid,
        #[arg(long)]
        title: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        #[arg(long)]
        course_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long, default_value_t = 0)]
        duration: i32,
        #[arg(long)]
        order_index: Option<i32>,
        #[arg(long)]
        is_free: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EnrollmentCommands {
    Add {
        #[arg(long)]
        user_id: Uuid,
        #[arg(long)]
        course_id: Uuid,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    /// Create a quiz from a JSON draft file
    Add {
        #[arg(long)]
        file: std::path::PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")?;
    let db = DbConnection::connect(&database_url)?;
    let mm = ModelManager::new(db);
    let actor = AuthenticatedUser::admin();

    match cli.command {
        Commands::User {
            action: UserCommands::Add { username, role },
        } => {
            let user = UserEntity::create(&mm, &actor, UserEntityCreate { username, role }).await?;
            println!("created user {}", user.id());
        }
        Commands::Course {
            action:
                CourseCommands::Add {
                    instructor_id,
                    title,
                },
        } => {
            let course = Course::create(
                &mm,
                &actor,
                CourseCreate {
                    instructor_id,
                    title,
                },
            )
            .await?;
            println!("created course {}", course.id());
        }
        Commands::Lesson {
            action:
                LessonCommands::Add {
                    course_id,
                    title,
                    duration,
                    order_index,
                    is_free,
                },
        } => {
            let lesson = Lesson::create(
                &mm,
                &actor,
                LessonCreate {
                    course_id,
                    title,
                    duration,
                    order_index,
                    is_free,
                },
            )
            .await?;
            println!("created lesson {}", lesson.id());
        }
        Commands::Enrollment {
            action: EnrollmentCommands::Add { user_id, course_id },
        } => {
            let enrollment =
                Enrollment::create(&mm, &actor, EnrollmentCreate { user_id, course_id }).await?;
            println!("created enrollment {}", enrollment.id());
        }
        Commands::Quiz {
            action: QuizCommands::Add { file },
        } => {
            let draft: QuizCreate = serde_json::from_str(&std::fs::read_to_string(file)?)?;
            draft.validate()?;
            let quiz = Quiz::create(&mm, &actor, draft).await?;
            println!("created quiz {}", quiz.id());
        }
    }

    Ok(())
}
