use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn techlojinha(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("techlojinha").unwrap();
    cmd.current_dir(dir)
        .env_remove("TECHLOJINHA_DATA")
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("dados_estoque.json")
}

#[test]
fn first_run_lists_default_stock_without_writing() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("📦 ESTOQUE ATUALIZADO:"))
        .stdout(predicate::str::contains("• Placa de vídeo: RTX 5060 Ti"))
        .stdout(predicate::str::contains("• Fonte: XPG 650W"));

    assert!(!data_file(&dir).exists());
}

#[test]
fn add_persists_full_snapshot() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["add", "  SSD ", "Samsung 970"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• SSD: Kingston 1TB, Samsung 970"));

    let on_disk = fs::read_to_string(data_file(&dir)).unwrap();
    assert!(on_disk.starts_with("{\n    \"Placa de vídeo\": [\n        \"RTX 5060 Ti\"\n    ],"));
    assert!(on_disk.contains("\"Samsung 970\""));
    assert!(on_disk.contains("Placa Mãe"));
}

#[test]
fn sell_last_unit_removes_category_on_disk() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["sell", "Fonte", "XPG 650W"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fonte").not());

    let on_disk = fs::read_to_string(data_file(&dir)).unwrap();
    assert!(!on_disk.contains("Fonte"));
    assert!(on_disk.contains("SSD"));
}

#[test]
fn sell_unknown_category_gives_guidance_and_saves_nothing() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["vender", "GPU", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A categoria 'GPU' não existe no estoque"))
        .stdout(predicate::str::contains("Dica: Verifique os acentos"));

    assert!(!data_file(&dir).exists());
}

#[test]
fn sell_unknown_product_gives_guidance() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["sell", "SSD", "NoSuchDrive"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "O produto 'NoSuchDrive' não foi encontrado em 'SSD'",
        ));
}

#[test]
fn sell_with_blank_field_is_rejected() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["sell", "SSD", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Digite a Categoria e o Produto para vender!",
        ));
}

#[test]
fn search_shows_one_category() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["search", "Processador"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔍 RESULTADO DA BUSCA: [Processador]"))
        .stdout(predicate::str::contains("• Produtos: Ryzen 5 5600"))
        .stdout(predicate::str::contains("SSD").not());
}

#[test]
fn search_without_category_lists_everything() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .arg("buscar")
        .assert()
        .success()
        .stdout(predicate::str::contains("📦 ESTOQUE ATUALIZADO:"));
}

#[test]
fn search_misses_are_case_sensitive() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["search", "ssd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A categoria 'ssd' não foi encontrada"));
}

#[test]
fn corrupt_file_falls_back_and_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    fs::write(data_file(&dir), "not json at all").unwrap();

    techlojinha(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("• SSD: Kingston 1TB"))
        .stderr(predicate::str::contains("could not load inventory"));

    assert_eq!(
        fs::read_to_string(data_file(&dir)).unwrap(),
        "not json at all"
    );
}

#[test]
fn state_carries_across_runs() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["add", "Teclado", "Logitech K120"])
        .assert()
        .success();

    techlojinha(dir.path())
        .args(["search", "Teclado"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• Produtos: Logitech K120"));
}

#[test]
fn file_flag_and_env_choose_the_data_file() {
    let dir = TempDir::new().unwrap();
    let flagged = dir.path().join("flag.json");
    let from_env = dir.path().join("env.json");

    techlojinha(dir.path())
        .env("TECHLOJINHA_DATA", &from_env)
        .args(["add", "SSD", "Samsung 970", "--file"])
        .arg(&flagged)
        .assert()
        .success();
    assert!(flagged.exists());
    assert!(!from_env.exists());

    techlojinha(dir.path())
        .env("TECHLOJINHA_DATA", &from_env)
        .args(["add", "SSD", "Samsung 970"])
        .assert()
        .success();
    assert!(from_env.exists());
    assert!(!data_file(&dir).exists());
}

#[test]
fn path_prints_resolved_location() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .args(["path", "--file", "estoque/loja.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("estoque/loja.json"));
}

#[test]
fn shell_session_runs_form_actions() {
    let dir = TempDir::new().unwrap();

    techlojinha(dir.path())
        .arg("shell")
        .write_stdin("a\nTeclado\nLogitech K120\nb\nTeclado\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gerenciamento Techlojinha"))
        .stdout(predicate::str::contains("• Teclado: Logitech K120"))
        .stdout(predicate::str::contains("[Teclado]"));

    let on_disk = fs::read_to_string(data_file(&dir)).unwrap();
    assert!(on_disk.contains("Logitech K120"));
}
