use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::normalize::{capitalize_first, normalize_name, route_segment};
use crate::render::render_page;
use crate::utils::osc8_file_link;
use crate::Dataset;

/// Generator configuration. The defaults wired up in main.rs reproduce the
/// deployed site; see [`crate::BASE_PATH`] and friends.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub output_dir: PathBuf,
    /// Site-relative path the SPA is served under (redirect target prefix)
    pub base_path: String,
    /// Absolute URL prefix for og:url (origin + base path)
    pub base_url: String,
}

/// One planned output page, fully resolved before anything touches disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub filename: String,
    pub title: String,
    pub description: String,
    pub og_url: String,
    pub redirect_url: String,
}

impl Page {
    /// Build a page from the display names of its ancestor chain
    /// (country, then optionally region, then city). The filename joins
    /// normalized tokens with hyphens; the hash route joins hyphen-stripped
    /// segments with slashes.
    fn new(config: &Config, names: &[&str], title: String, description: String) -> Self {
        let filename = format!(
            "{}.html",
            names.iter().map(|n| normalize_name(n)).collect::<Vec<_>>().join("-")
        );
        let route = format!(
            "#/{}",
            names.iter().map(|n| route_segment(n)).collect::<Vec<_>>().join("/")
        );
        Page {
            filename,
            title,
            description,
            og_url: format!("{}/{}", config.base_url, route),
            redirect_url: format!("{}/{}", config.base_path, route),
        }
    }
}

/// Walk the country -> region -> city hierarchy and derive every page.
///
/// Cities attach to a region by normalized display-name equality with the
/// region's name. A city whose parent matches no region in its country gets
/// no page; two regions normalizing identically are indistinguishable.
pub fn plan_pages(data: &Dataset, config: &Config) -> Vec<Page> {
    let mut pages = Vec::new();

    for (country, record) in data {
        let country = country.as_str();
        let country_name = capitalize_first(country);

        pages.push(Page::new(
            config,
            &[country],
            format!("Desiertos: {}", country_name),
            format!("Visualización de datos para {}", country_name),
        ));

        let regions = record.large_units.as_deref().unwrap_or(&[]);
        let cities = record.small_units.as_deref().unwrap_or(&[]);

        for region in regions {
            let region_name = region.basic_info.name.as_str();

            pages.push(Page::new(
                config,
                &[country, region_name],
                format!("Desiertos: {}, {}", region_name, country_name),
                format!("Visualización de datos para {}, {}", region_name, country_name),
            ));

            let region_token = normalize_name(region_name);
            for city in cities
                .iter()
                .filter(|c| normalize_name(&c.basic_info.parent) == region_token)
            {
                let city_name = city.basic_info.name.as_str();
                // Titles show the city's own PARENT string, not the region name
                let parent = city.basic_info.parent.as_str();

                pages.push(Page::new(
                    config,
                    &[country, region_name, city_name],
                    format!("Desiertos: {}, {}, {}", city_name, parent, country_name),
                    format!(
                        "Visualización de datos para {}, {}, {}",
                        city_name, parent, country_name
                    ),
                ));
            }
        }
    }

    pages
}

/// Main generation function: read the dataset, derive every page, write
/// them all into the output directory.
///
/// A missing data file or malformed JSON is reported and returns cleanly
/// with nothing written. Any other I/O failure propagates.
pub fn run_generate(config: &Config) -> Result<()> {
    let raw = match fs::read_to_string(&config.data_file) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            eprintln!(
                "Error: {} not found. Run this from the visualization directory (the dataset lives two levels up).",
                config.data_file.display()
            );
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", config.data_file.display()))
        }
    };

    let data: Dataset = match serde_json::from_str(&raw) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error: invalid JSON in {}: {}", config.data_file.display(), e);
            return Ok(());
        }
    };

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;
        println!("Created directory: {}", config.output_dir.display());
    }

    let pages = plan_pages(&data, config);

    let mut generated = 0usize;
    for page in &pages {
        let html = render_page(&page.title, &page.description, &page.og_url, &page.redirect_url);
        let path = config.output_dir.join(&page.filename);
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Generated: {}", page.filename);
        generated += 1;
    }

    let dir = config.output_dir.to_string_lossy();
    println!(
        "Done! Generated {} pages in {}",
        generated,
        osc8_file_link(&dir, &format!("{}/", dir))
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const CHILE: &str = r#"{
        "Chile": {
            "large_units": [{"BASIC_INFO": {"NAME": "Atacama"}}],
            "small_units": [{"BASIC_INFO": {"NAME": "Calama", "PARENT": "Atacama"}}]
        }
    }"#;

    fn test_config(root: &Path) -> Config {
        Config {
            data_file: root.join("data.json"),
            output_dir: root.join("static-pages"),
            base_path: "/desiertos-latinoamerica/experiments/d3-viz".to_string(),
            base_url: "https://coldfoot.studio/desiertos-latinoamerica/experiments/d3-viz"
                .to_string(),
        }
    }

    fn parse(json: &str) -> Dataset {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plan_chile_hierarchy() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        let pages = plan_pages(&parse(CHILE), &config);

        let files: Vec<&str> = pages.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(files, ["chile.html", "chile-atacama.html", "chile-atacama-calama.html"]);

        assert!(pages[0].redirect_url.ends_with("/#/chile"));
        assert!(pages[1].redirect_url.ends_with("/#/chile/atacama"));
        assert!(pages[2].redirect_url.ends_with("/#/chile/atacama/calama"));
        assert_eq!(
            pages[2].og_url,
            "https://coldfoot.studio/desiertos-latinoamerica/experiments/d3-viz/#/chile/atacama/calama"
        );

        assert_eq!(pages[0].title, "Desiertos: Chile");
        assert_eq!(pages[1].title, "Desiertos: Atacama, Chile");
        assert_eq!(pages[2].title, "Desiertos: Calama, Atacama, Chile");
        assert_eq!(pages[2].description, "Visualización de datos para Calama, Atacama, Chile");
    }

    #[test]
    fn test_orphan_city_excluded() {
        let json = r#"{
            "Chile": {
                "large_units": [{"BASIC_INFO": {"NAME": "Atacama"}}],
                "small_units": [
                    {"BASIC_INFO": {"NAME": "Calama", "PARENT": "Atacama"}},
                    {"BASIC_INFO": {"NAME": "Perdida", "PARENT": "Antofagasta"}}
                ]
            }
        }"#;
        let dir = TempDir::new().unwrap();
        let pages = plan_pages(&parse(json), &test_config(dir.path()));
        assert_eq!(pages.len(), 3);
        assert!(!pages.iter().any(|p| p.filename.contains("perdida")));
    }

    #[test]
    fn test_parent_join_is_normalized() {
        // Accents and case differ between PARENT and the region name; the
        // normalized forms still match.
        let json = r#"{
            "Peru": {
                "large_units": [{"BASIC_INFO": {"NAME": "Ancash"}}],
                "small_units": [{"BASIC_INFO": {"NAME": "Huaraz", "PARENT": "ÁNCASH"}}]
            }
        }"#;
        let dir = TempDir::new().unwrap();
        let pages = plan_pages(&parse(json), &test_config(dir.path()));
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].filename, "peru-ancash-huaraz.html");
        // The title keeps the city's raw PARENT string
        assert_eq!(pages[2].title, "Desiertos: Huaraz, ÁNCASH, Peru");
    }

    #[test]
    fn test_page_count_property() {
        let json = r#"{
            "argentina": {
                "large_units": [
                    {"BASIC_INFO": {"NAME": "Salta"}},
                    {"BASIC_INFO": {"NAME": "Jujuy"}}
                ],
                "small_units": [
                    {"BASIC_INFO": {"NAME": "Cafayate", "PARENT": "Salta"}},
                    {"BASIC_INFO": {"NAME": "Tilcara", "PARENT": "Jujuy"}},
                    {"BASIC_INFO": {"NAME": "Humahuaca", "PARENT": "Jujuy"}}
                ]
            },
            "chile": {}
        }"#;
        let dir = TempDir::new().unwrap();
        let pages = plan_pages(&parse(json), &test_config(dir.path()));
        // 2 countries + 2 regions + 3 matched cities
        assert_eq!(pages.len(), 7);
    }

    #[test]
    fn test_accented_country_naming() {
        let json = r#"{"méxico": {}}"#;
        let dir = TempDir::new().unwrap();
        let pages = plan_pages(&parse(json), &test_config(dir.path()));
        assert_eq!(pages[0].filename, "mexico.html");
        assert_eq!(pages[0].title, "Desiertos: México");
        assert_eq!(pages[0].description, "Visualización de datos para México");
    }

    #[test]
    fn test_run_generate_writes_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.data_file, CHILE).unwrap();

        run_generate(&config).unwrap();

        let country = config.output_dir.join("chile.html");
        let city = config.output_dir.join("chile-atacama-calama.html");
        assert!(country.exists());
        assert!(config.output_dir.join("chile-atacama.html").exists());
        assert!(city.exists());

        let html = fs::read_to_string(city).unwrap();
        assert!(html.contains("<title>Desiertos: Calama, Atacama, Chile</title>"));
        assert!(html.contains(
            "https://coldfoot.studio/desiertos-latinoamerica/experiments/d3-viz/#/chile/atacama/calama"
        ));
    }

    #[test]
    fn test_regenerate_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.data_file, CHILE).unwrap();

        run_generate(&config).unwrap();
        let first = fs::read(config.output_dir.join("chile-atacama.html")).unwrap();

        run_generate(&config).unwrap();
        let second = fs::read(config.output_dir.join("chile-atacama.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_data_file_is_clean() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        run_generate(&config).unwrap();

        assert!(!config.output_dir.exists());
    }

    #[test]
    fn test_malformed_json_is_clean() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.data_file, "{not json").unwrap();

        run_generate(&config).unwrap();

        assert!(!config.output_dir.exists());
    }
}
