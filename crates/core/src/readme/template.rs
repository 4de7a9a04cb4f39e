//! Built-in README template.
//!
//! Placeholders are filled by [`super::document::build_render_context`].

pub const DEFAULT_TEMPLATE: &str = r#"# {{role_name}}

- [1. Description](#1-description)
- [2. Environments](#2-environments)
- [3. Requirements](#3-requirements)
- [4. Dependencies](#4-dependencies)
- [5. Variables](#5-variables)
  - [5.1 Mandatory variables](#51-mandatory-variables)
  - [5.2 Default variables](#52-default-variables)
- [6. Procedure](#6-procedure)
- [7. Usage](#7-usage)
  - [7.1 Example Playbook](#71-example-playbook)
- [8. Known problems and limitations](#8-known-problems-and-limitations)
- [9. Author Information](#9-author-information)

## 1. Description

{{description}}

## 2. Environments

{{platforms_section}}

## 3. Requirements

<!-- List the prerequisites that Ansible itself and this role do not cover. -->
None

## 4. Dependencies

{{dependencies_section}}

## 5. Variables

### 5.1 Mandatory variables

{{mandatory_vars_section}}

### 5.2 Default variables

{{default_vars_section}}

## 6. Procedure

Before using the role, add the following lines to your `requirements.yml` and run `ansible-galaxy install -r requirements.yml`:

```yaml
{{requirements_snippet}}
```

## 7. Usage

### 7.1 Example Playbook

```yaml
{{example_playbook}}
```

## 8. Known problems and limitations

<!-- Document known issues here so users do not report them again. -->
None

## 9. Author Information

{{author}}
"#;
