//! Demo mínimo del punto de preprocesamiento: corre el `Base64DecodeStep`
//! sobre un mensaje bien formado, uno malformado y uno estructurado, con el
//! logger de producción sobre `tracing`.

use msg_adapters::Base64DecodeStep;
use msg_core::{run_step, InMemoryMessage, MessageCarrier, TracingLogger};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env()
                             .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
        .init();

    let step = Base64DecodeStep::new();
    let logger = TracingLogger;

    // Mensaje bien formado: el payload se reemplaza por su texto decodificado.
    let mut ok = InMemoryMessage::new("SGVsbG8sIFdvcmxkIQ==");
    let status = run_step(&step, &mut ok, &logger);
    println!("[{status:?}] payload = {:?}", ok.payload());

    // Mensaje malformado: pasa intacto; el logger recibe un registro de error.
    let mut bad = InMemoryMessage::new("not-base64-$$$");
    let status = run_step(&step, &mut bad, &logger);
    println!("[{status:?}] payload = {:?}", bad.payload());

    // Payload estructurado: se materializa a texto antes de decodificar.
    let mut structured = InMemoryMessage::from_value(serde_json::json!({ "body": "SGVsbG8=" }));
    let status = run_step(&step, &mut structured, &logger);
    println!("[{status:?}] payload = {:?}", structured.payload());
}
