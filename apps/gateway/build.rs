//! Build script for the gateway.
//!
//! Compiles `proto/racing.proto` and `proto/sports.proto` into client stubs.
//! The servers live in catalog-api; the gateway only calls them.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let protos = ["../../proto/racing.proto", "../../proto/sports.proto"];

    for proto in &protos {
        println!("cargo:rerun-if-changed={}", proto);
    }

    tonic_build::configure()
        // Don't generate server code - the gateway is a client
        .build_server(false)
        .build_client(true)
        .compile_protos(&protos, &["../../proto"])?;

    Ok(())
}
