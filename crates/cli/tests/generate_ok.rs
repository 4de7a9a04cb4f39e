use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn write_role(root: &Path) {
    for dir in ["files", "handlers", "templates"] {
        fs::create_dir_all(root.join(dir)).unwrap();
    }
    write_file(
        &root.join("defaults/main.yml"),
        r#"---
# Port nginx listens on
nginx_port: 8080
nginx_user: www-data
# Compress responses
nginx_gzip: yes

# Not attached to anything
# Enable TLS
nginx_tls: false
"#,
    );
    write_file(
        &root.join("vars/main.yml"),
        "# Public hostname of the server\nnginx_hostname: example.org\n",
    );
    write_file(
        &root.join("tasks/main.yml"),
        r#"- name: Check mandatory variables
  ansible.builtin.assert:
    that:
      - nginx_region is defined
      - nginx_hostname is defined
- name: Install
  ansible.builtin.package:
    name: nginx
"#,
    );
    write_file(
        &root.join("meta/main.yml"),
        r#"galaxy_info:
  role_name: nginx
  author: Ops Team
  description: Installs and configures nginx
  platforms:
    - name: Ubuntu
      versions: [jammy, noble]
dependencies:
  - common
"#,
    );
}

fn roledoc(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("roledoc"));
    cmd.env("XDG_CONFIG_HOME", config_home).current_dir(config_home);
    cmd
}

fn line_with<'a>(content: &'a str, needle: &str) -> &'a str {
    content
        .lines()
        .find(|l| l.starts_with('|') && l.contains(needle))
        .unwrap_or_else(|| panic!("no table row with {needle} in:\n{content}"))
}

#[test]
fn generate_writes_readme_into_working_directory() {
    let tmp = tempdir().unwrap();
    let role = tmp.path().join("nginx");
    write_role(&role);

    roledoc(tmp.path())
        .args(["generate", "--role-path", role.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   roledoc generate"))
        .stdout(predicate::str::contains("role:      nginx"))
        .stdout(predicate::str::contains("mandatory: 2"))
        .stdout(predicate::str::contains("output:    README.md"))
        .stdout(predicate::str::contains("defaults:  4"));

    assert!(!role.join("README.md").exists());
    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# nginx\n"));
    assert!(readme.contains("Installs and configures nginx"));
    assert!(readme.contains("- common"));
    assert!(readme.contains("## 9. Author Information\n\nOps Team"));

    let port = line_with(&readme, "nginx_port");
    assert!(port.contains("integer"));
    assert!(port.contains("8080"));
    assert!(port.contains("Port nginx listens on"));

    let gzip = line_with(&readme, "nginx_gzip");
    assert!(gzip.contains("boolean"));
    assert!(gzip.contains("true"));
    assert!(gzip.contains("Compress responses"));

    let tls = line_with(&readme, "nginx_tls");
    assert!(tls.contains("boolean"));
    assert!(tls.contains("Enable TLS"));
    assert!(!tls.contains("Not attached"));

    let hostname = line_with(&readme, "nginx_hostname");
    assert!(hostname.contains("string"));
    assert!(hostname.contains("Public hostname of the server"));

    let ubuntu = line_with(&readme, "Ubuntu");
    assert!(ubuntu.contains("jammy, noble"));

    // mandatory names are sorted
    let hostname_pos = readme.find("| nginx_hostname").unwrap();
    let region_pos = readme.find("| nginx_region").unwrap();
    assert!(hostname_pos < region_pos);

    assert!(readme.contains("src: git+https://github.com/user/nginx.git"));
    assert!(readme.contains("        nginx_hostname: <nginx_hostname>\n"));
    assert!(readme.contains("        nginx_region: <nginx_region>\n"));
}

#[test]
fn generate_honours_output_and_clone_url() {
    let tmp = tempdir().unwrap();
    let role = tmp.path().join("nginx");
    write_role(&role);
    let out = tmp.path().join("docs.md");

    roledoc(tmp.path())
        .args([
            "generate",
            "-r",
            role.to_str().unwrap(),
            "-u",
            "https://git.example.org/ops/nginx.git",
            "-o",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("output:    {}", out.display())));

    let readme = fs::read_to_string(&out).unwrap();
    assert!(readme.contains("src: git+https://git.example.org/ops/nginx.git"));
    assert!(!role.join("README.md").exists());
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn generate_uses_example_playbook_and_custom_template() {
    let tmp = tempdir().unwrap();
    let role = tmp.path().join("nginx");
    write_role(&role);
    write_file(&role.join("example.yml"), "- hosts: web\n  roles:\n    - nginx\n");

    let template = tmp.path().join("readme.tpl.md");
    write_file(
        &template,
        "# {{role_name | uppercase}}\n\n```yaml\n{{example_playbook}}\n```\n{{ not_a_placeholder }}\n",
    );

    roledoc(tmp.path())
        .args(["generate", "-r", role.to_str().unwrap()])
        .arg("--template")
        .arg(&template)
        .assert()
        .success();

    let readme = fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert_eq!(
        readme,
        "# NGINX\n\n```yaml\n- hosts: web\n  roles:\n    - nginx\n```\n{{ not_a_placeholder }}\n"
    );
}

#[test]
fn generate_reads_defaults_from_config() {
    let tmp = tempdir().unwrap();
    let role = tmp.path().join("nginx");
    write_role(&role);

    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
version = 1

[output]
path = "ROLE.md"
clone_url = "https://git.internal/nginx.git"
"#,
    );

    roledoc(tmp.path())
        .args(["--config", cfg.to_str().unwrap()])
        .args(["generate", "-r", role.to_str().unwrap()])
        .assert()
        .success();

    let readme = fs::read_to_string(role.join("ROLE.md")).unwrap();
    assert!(readme.contains("src: git+https://git.internal/nginx.git"));
}
