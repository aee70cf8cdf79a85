//! Examples command - CRUD on the example resource.

use super::print_json;
use crate::cli::args::{ExamplesAction, ExamplesArgs};
use crate::config::Config;
use crate::domain::{CreateExample, ExampleFilter, ExampleResponse, UpdateExample};
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ExampleService, Services};

/// Execute the examples command
pub async fn execute(args: ExamplesArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    let service = services.examples();
    run(service.as_ref(), args.action).await
}

/// Dispatch one action against the service and print the result.
pub async fn run(service: &dyn ExampleService, action: ExamplesAction) -> AppResult<()> {
    match action {
        ExamplesAction::List(filter) => {
            let examples = service.list_examples(ExampleFilter::from(filter)).await?;
            let response: Vec<ExampleResponse> =
                examples.into_iter().map(ExampleResponse::from).collect();
            print_json(&response)
        }
        ExamplesAction::Get { id } => {
            let example = service.get_example(id).await?;
            print_json(&ExampleResponse::from(example))
        }
        ExamplesAction::Create { code, example } => {
            let created = service
                .create_example(CreateExample { code, example })
                .await?;
            print_json(&ExampleResponse::from(created))
        }
        ExamplesAction::Update { id, code, example } => {
            let updated = service
                .update_example(id, UpdateExample { code, example })
                .await?;
            print_json(&ExampleResponse::from(updated))
        }
        ExamplesAction::Delete { id } => {
            service.delete_example(id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        ExamplesAction::Restore { id } => {
            let restored = service.restore_example(id).await?;
            print_json(&ExampleResponse::from(restored))
        }
    }
}
