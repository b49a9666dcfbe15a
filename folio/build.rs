fn main() {
    println!("cargo::rustc-check-cfg=cfg(tracing_pretty)");
    println!("cargo::rerun-if-env-changed=FOLIO_LOG_PRETTY");
    if std::env::var("FOLIO_LOG_PRETTY").is_ok_and(|pretty| pretty == "1") {
        println!("cargo::rustc-cfg=tracing_pretty");
    }
}
