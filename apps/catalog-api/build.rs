//! Build script for compiling Protocol Buffer definitions.
//!
//! Compiles `proto/racing.proto` and `proto/sports.proto` into Rust code using
//! tonic-build. The generated code is placed in `$OUT_DIR` and included via
//! `tonic::include_proto!` in `src/proto.rs`.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tell Cargo to rerun this build script if the proto files change
    println!("cargo:rerun-if-changed=../../proto/racing.proto");
    println!("cargo:rerun-if-changed=../../proto/sports.proto");

    // Server stubs for the two binaries, clients for in-process tests
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &["../../proto/racing.proto", "../../proto/sports.proto"],
            &["../../proto"],
        )?;

    Ok(())
}
