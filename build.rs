fn main() {
    // core/auth.rs reads the admin password through option_env!.
    println!("cargo:rerun-if-env-changed=FOLIO_ADMIN_PASSWORD");

    tauri_build::build()
}
