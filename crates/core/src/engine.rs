//! The scope & activation manager and the engine facade.
//!
//! All operations are synchronous and request-scoped. State that must
//! change as a unit (the one-active-theme-per-scope row plus part
//! materialization) changes inside a single critical section; everything
//! fallible is computed before that section so an error can never leave
//! the swap half-applied.

use crate::error::EngineError;
use crate::part::{Part, PartKey};
use crate::publish::{self, PublishRecord, PublishValidation};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use tessera_content::{compile, CompileOptions, ContentDocument};
use tessera_css::{generate, render_region_css, render_template_css};
use tessera_store::{BlobStore, SectionKey, SectionStore};
use tessera_tokens::TokenTree;
use tessera_types::{Region, Scope, SectionName, TemplateId, ThemeId};

/// Engine-wide configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Prefix under which master stylesheets are written, e.g. `public`.
    pub public_prefix: String,
    /// Document-compile policy (strict vs best-effort token resolution).
    pub compile: CompileOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            public_prefix: "public".to_string(),
            compile: CompileOptions::default(),
        }
    }
}

/// A customization request for one region: whole-document replacements of
/// the content and/or the region's custom CSS.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomizeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

/// The customization state of one `(theme, scope)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customization {
    pub theme: ThemeId,
    pub scope: Scope,
    /// Whether this theme is the scope's active theme right now.
    pub active: bool,
    /// Whether any region has been edited since activation.
    pub modified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<PublishRecord>,
    pub regions: Vec<RegionCustomization>,
}

/// Per-region view inside a [`Customization`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCustomization {
    pub region: Region,
    pub customized: bool,
    pub has_custom_css: bool,
    /// The raw (reference-carrying) content, for the editor.
    pub content: ContentDocument,
}

type TemplateKey = (ThemeId, Scope, TemplateId);

/// The theme engine: registry, activation manager, section regeneration,
/// and publish pipeline behind one facade.
#[derive(Debug)]
pub struct ThemeEngine {
    themes: RwLock<HashMap<ThemeId, Arc<Theme>>>,
    placeholders: RwLock<HashMap<(ThemeId, Region), Arc<ContentDocument>>>,
    parts: RwLock<HashMap<PartKey, Arc<Part>>>,
    /// One row per scope, pointing at its active theme. Swapped whole,
    /// under one write lock, so there is never a window with zero or two
    /// active themes for a scope.
    active: RwLock<HashMap<Scope, ThemeId>>,
    templates: RwLock<HashMap<TemplateKey, Arc<ContentDocument>>>,
    sections: SectionStore,
    published: RwLock<HashMap<(ThemeId, Scope), PublishRecord>>,
    blobs: Arc<dyn BlobStore>,
    config: EngineConfig,
}

impl ThemeEngine {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self::with_config(blobs, EngineConfig::default())
    }

    pub fn with_config(blobs: Arc<dyn BlobStore>, config: EngineConfig) -> Self {
        Self {
            themes: RwLock::new(HashMap::new()),
            placeholders: RwLock::new(HashMap::new()),
            parts: RwLock::new(HashMap::new()),
            active: RwLock::new(HashMap::new()),
            templates: RwLock::new(HashMap::new()),
            sections: SectionStore::new(),
            published: RwLock::new(HashMap::new()),
            blobs,
            config,
        }
    }

    // --- Theme registry ---

    pub fn create_theme(&self, theme: Theme) -> Result<(), EngineError> {
        let mut themes = lock_write(&self.themes, "themes")?;
        if themes.contains_key(&theme.id) {
            return Err(EngineError::Validation(format!(
                "theme '{}' already exists",
                theme.id
            )));
        }
        log::info!("created theme '{}'", theme.id);
        themes.insert(theme.id.clone(), Arc::new(theme));
        Ok(())
    }

    pub fn theme(&self, id: &ThemeId) -> Option<Arc<Theme>> {
        self.themes.read().ok()?.get(id).cloned()
    }

    fn require_theme(&self, id: &ThemeId) -> Result<Arc<Theme>, EngineError> {
        self.theme(id)
            .ok_or_else(|| EngineError::ThemeNotFound { theme: id.clone() })
    }

    /// Deletes a theme and everything keyed by it. Fails with `ThemeInUse`
    /// while the theme is active for any scope.
    pub fn delete_theme(&self, id: &ThemeId) -> Result<(), EngineError> {
        {
            let active = lock_read(&self.active, "active")?;
            if active.values().any(|theme| theme == id) {
                return Err(EngineError::ThemeInUse { theme: id.clone() });
            }
        }

        if lock_write(&self.themes, "themes")?.remove(id).is_none() {
            return Err(EngineError::ThemeNotFound { theme: id.clone() });
        }
        lock_write(&self.placeholders, "placeholders")?.retain(|(theme, _), _| theme != id);
        lock_write(&self.parts, "parts")?.retain(|key, _| &key.theme != id);
        lock_write(&self.templates, "templates")?.retain(|(theme, _, _), _| theme != id);
        lock_write(&self.published, "published")?.retain(|(theme, _), _| theme != id);
        self.sections.clear_theme(id);
        log::info!("deleted theme '{}'", id);
        Ok(())
    }

    /// Replaces a theme's token tree, then recompiles every part of that
    /// theme and regenerates the affected sections for every scope holding
    /// them (the "token-tree change" regeneration trigger).
    pub fn update_tokens(&self, id: &ThemeId, tokens: TokenTree) -> Result<(), EngineError> {
        {
            let mut themes = lock_write(&self.themes, "themes")?;
            let existing = themes
                .get(id)
                .ok_or_else(|| EngineError::ThemeNotFound { theme: id.clone() })?;
            let mut updated = (**existing).clone();
            updated.tokens = tokens;
            themes.insert(id.clone(), Arc::new(updated));
        }
        let theme = self.require_theme(id)?;

        let keys: Vec<PartKey> = {
            let parts = lock_read(&self.parts, "parts")?;
            parts.keys().filter(|key| &key.theme == id).cloned().collect()
        };
        for key in &keys {
            let existing = {
                let parts = lock_read(&self.parts, "parts")?;
                parts.get(key).cloned()
            };
            if let Some(existing) = existing {
                let mut updated = (*existing).clone();
                updated.compiled = compile(&existing.raw, &theme.tokens, self.config.compile)?;
                lock_write(&self.parts, "parts")?.insert(key.clone(), Arc::new(updated));
            }
        }

        for scope in self.scopes_touching(id)? {
            self.regenerate_scope(&theme, &scope)?;
        }
        Ok(())
    }

    // --- Placeholders (blueprint authoring path) ---

    /// Sets the blueprint's default content for a region. This is the
    /// theme-builder path; scope customization never goes through here.
    pub fn set_placeholder(
        &self,
        theme: &ThemeId,
        region: Region,
        content: ContentDocument,
    ) -> Result<(), EngineError> {
        self.require_theme(theme)?;
        lock_write(&self.placeholders, "placeholders")?
            .insert((theme.clone(), region), Arc::new(content));
        Ok(())
    }

    pub fn placeholder(&self, theme: &ThemeId, region: Region) -> Option<Arc<ContentDocument>> {
        self.placeholders
            .read()
            .ok()?
            .get(&(theme.clone(), region))
            .cloned()
    }

    // --- Activation ---

    /// Activates a theme for a scope.
    ///
    /// Materializes a part from the placeholder default for every region
    /// that does not have one yet, never overwriting existing part
    /// content, so calling this twice (or re-activating after a revert) is
    /// safe. Any previously active theme for the scope is deactivated in
    /// the same critical section; its parts are retained for lossless
    /// revert.
    pub fn activate(&self, theme_id: &ThemeId, scope: &Scope) -> Result<(), EngineError> {
        let theme = self.require_theme(theme_id)?;

        // All fallible work happens before any state is touched, so the
        // swap below cannot half-apply.
        let mut defaults: Vec<(Region, Part)> = Vec::new();
        for region in Region::ALL {
            let raw = self
                .placeholder(theme_id, region)
                .map(|doc| (*doc).clone())
                .unwrap_or_else(|| ContentDocument::empty(region.as_str()));
            let compiled = compile(&raw, &theme.tokens, self.config.compile)?;
            defaults.push((region, Part::materialized(raw, compiled)));
        }

        {
            let mut active = lock_write(&self.active, "active")?;
            let mut parts = lock_write(&self.parts, "parts")?;

            if let Some(previous) = active.insert(scope.clone(), theme_id.clone()) {
                if &previous != theme_id {
                    log::info!("deactivated theme '{}' for scope '{}'", previous, scope);
                }
            }
            for (region, part) in defaults {
                let key = PartKey::new(theme_id.clone(), scope.clone(), region);
                parts.entry(key).or_insert_with(|| Arc::new(part));
            }
        }

        self.regenerate_scope(&theme, scope)?;
        log::info!("activated theme '{}' for scope '{}'", theme_id, scope);
        Ok(())
    }

    /// The scope's currently active theme, if any.
    pub fn active_theme(&self, scope: &Scope) -> Option<ThemeId> {
        self.active.read().ok()?.get(scope).cloned()
    }

    // --- Customization ---

    /// Replaces a part's content and/or custom CSS, then regenerates the
    /// affected section. Whole-document replacement, no field-level merge.
    pub fn customize(
        &self,
        theme_id: &ThemeId,
        scope: &Scope,
        region: Region,
        request: CustomizeRequest,
    ) -> Result<(), EngineError> {
        let theme = self.require_theme(theme_id)?;
        if request.content.is_none() && request.css.is_none() {
            return Err(EngineError::Validation(
                "customize requires new content and/or css".to_string(),
            ));
        }

        let key = PartKey::new(theme_id.clone(), scope.clone(), region);
        let existing = lock_read(&self.parts, "parts")?
            .get(&key)
            .cloned()
            .ok_or_else(|| EngineError::NotActivated {
                theme: theme_id.clone(),
                scope: scope.clone(),
            })?;

        let mut updated = (*existing).clone();
        if let Some(content) = request.content {
            updated.compiled = compile(&content, &theme.tokens, self.config.compile)?;
            updated.raw = content;
        }
        if let Some(css_text) = request.css {
            updated.custom_css = if css_text.trim().is_empty() {
                None
            } else {
                Some(css_text)
            };
        }
        updated.customized = true;

        lock_write(&self.parts, "parts")?.insert(key, Arc::new(updated));
        self.regenerate_region(&theme, scope, region)?;
        log::debug!(
            "customized {} of theme '{}' for scope '{}'",
            region,
            theme_id,
            scope
        );
        Ok(())
    }

    /// Read-only view of a scope's customization of a theme.
    pub fn get_customization(
        &self,
        theme_id: &ThemeId,
        scope: &Scope,
    ) -> Result<Customization, EngineError> {
        self.require_theme(theme_id)?;

        let parts = lock_read(&self.parts, "parts")?;
        let mut regions = Vec::new();
        for region in Region::ALL {
            let key = PartKey::new(theme_id.clone(), scope.clone(), region);
            if let Some(part) = parts.get(&key) {
                regions.push(RegionCustomization {
                    region,
                    customized: part.customized,
                    has_custom_css: part.custom_css.is_some(),
                    content: part.raw.clone(),
                });
            }
        }
        let modified = regions.iter().any(|r| r.customized);
        drop(parts);

        let published = lock_read(&self.published, "published")?
            .get(&(theme_id.clone(), scope.clone()))
            .cloned();

        Ok(Customization {
            theme: theme_id.clone(),
            scope: scope.clone(),
            active: self.active_theme(scope).as_ref() == Some(theme_id),
            modified,
            published,
            regions,
        })
    }

    // --- Templates ---

    /// Saves a page template for a scope and regenerates its section.
    pub fn save_template(
        &self,
        theme_id: &ThemeId,
        scope: &Scope,
        template: TemplateId,
        content: ContentDocument,
    ) -> Result<(), EngineError> {
        let theme = self.require_theme(theme_id)?;
        let compiled = compile(&content, &theme.tokens, self.config.compile)?;

        lock_write(&self.templates, "templates")?.insert(
            (theme_id.clone(), scope.clone(), template),
            Arc::new(content),
        );

        let css_text = render_template_css(template, &compiled)?;
        self.sections.save(
            SectionKey::new(
                theme_id.clone(),
                scope.clone(),
                SectionName::Template(template),
            ),
            &css_text,
        )?;
        Ok(())
    }

    // --- Sections ---

    /// Stores a generated section directly. Unknown section names are a
    /// validation error; byte-identical CSS is a no-op that leaves the
    /// section's version alone.
    pub fn save_section(
        &self,
        theme_id: &ThemeId,
        scope: &Scope,
        name: &str,
        css: &str,
    ) -> Result<(), EngineError> {
        self.require_theme(theme_id)?;
        let name: SectionName = name.parse().map_err(EngineError::Validation)?;
        self.sections
            .save(SectionKey::new(theme_id.clone(), scope.clone(), name), css)?;
        Ok(())
    }

    /// Reads a stored section's CSS, if present.
    pub fn get_section(
        &self,
        theme_id: &ThemeId,
        scope: &Scope,
        name: &str,
    ) -> Result<Option<Arc<str>>, EngineError> {
        self.require_theme(theme_id)?;
        let name: SectionName = name.parse().map_err(EngineError::Validation)?;
        Ok(self
            .sections
            .get(&SectionKey::new(theme_id.clone(), scope.clone(), name))
            .map(|record| Arc::clone(&record.css)))
    }

    // --- Section regeneration ---

    /// Explicit regenerate request: recomputes every section for the
    /// `(theme, scope)` pair from current state. Idempotent; unchanged
    /// inputs produce byte-identical CSS and leave versions alone.
    pub fn regenerate(&self, theme_id: &ThemeId, scope: &Scope) -> Result<(), EngineError> {
        let theme = self.require_theme(theme_id)?;
        self.regenerate_scope(&theme, scope)
    }

    fn regenerate_scope(&self, theme: &Theme, scope: &Scope) -> Result<(), EngineError> {
        let variables = generate(&theme.tokens)?;
        self.sections.save(
            SectionKey::new(theme.id.clone(), scope.clone(), SectionName::Variables),
            &variables,
        )?;

        for region in Region::ALL {
            self.regenerate_region(theme, scope, region)?;
        }

        let templates: Vec<(TemplateId, Arc<ContentDocument>)> = {
            let templates = lock_read(&self.templates, "templates")?;
            templates
                .iter()
                .filter(|((t, s, _), _)| t == &theme.id && s == scope)
                .map(|((_, _, id), doc)| (*id, Arc::clone(doc)))
                .collect()
        };
        for (id, raw) in templates {
            let compiled = compile(&raw, &theme.tokens, self.config.compile)?;
            let css_text = render_template_css(id, &compiled)?;
            self.sections.save(
                SectionKey::new(theme.id.clone(), scope.clone(), SectionName::Template(id)),
                &css_text,
            )?;
        }
        Ok(())
    }

    fn regenerate_region(
        &self,
        theme: &Theme,
        scope: &Scope,
        region: Region,
    ) -> Result<(), EngineError> {
        let key = PartKey::new(theme.id.clone(), scope.clone(), region);
        let part = lock_read(&self.parts, "parts")?.get(&key).cloned();
        if let Some(part) = part {
            let css_text = render_region_css(region, &part.compiled, part.custom_css.as_deref())?;
            self.sections.save(
                SectionKey::new(theme.id.clone(), scope.clone(), region.into()),
                &css_text,
            )?;
        }
        Ok(())
    }

    /// Every scope holding parts, templates, or the active row for a theme.
    fn scopes_touching(&self, theme: &ThemeId) -> Result<HashSet<Scope>, EngineError> {
        let mut scopes = HashSet::new();
        for key in lock_read(&self.parts, "parts")?.keys() {
            if &key.theme == theme {
                scopes.insert(key.scope.clone());
            }
        }
        for (t, scope, _) in lock_read(&self.templates, "templates")?.keys() {
            if t == theme {
                scopes.insert(scope.clone());
            }
        }
        for (scope, active) in lock_read(&self.active, "active")?.iter() {
            if active == theme {
                scopes.insert(scope.clone());
            }
        }
        Ok(scopes)
    }

    // --- Publishing ---

    /// Pre-checks that every required section exists for the scope.
    pub fn validate_publish(&self, theme_id: &ThemeId, scope: &Scope) -> PublishValidation {
        let snapshot = self.sections.snapshot_for(theme_id, scope);
        let missing = publish::missing_sections(&snapshot);
        PublishValidation {
            valid: missing.is_empty(),
            missing,
        }
    }

    /// Merges the scope's sections into the versioned master stylesheet
    /// and writes it to the blob store.
    pub fn publish(&self, theme_id: &ThemeId, scope: &Scope) -> Result<PublishRecord, EngineError> {
        self.require_theme(theme_id)?;

        let snapshot = self.sections.snapshot_for(theme_id, scope);
        let missing = publish::missing_sections(&snapshot);
        if !missing.is_empty() {
            return Err(EngineError::IncompleteSections {
                missing: missing.iter().map(ToString::to_string).collect(),
            });
        }

        let (css_text, version) = publish::merge_sections(&snapshot);
        let path = publish::master_path(&self.config.public_prefix, theme_id, scope);
        self.blobs.put(&path, css_text.as_bytes())?;

        let record = PublishRecord { path, version };
        lock_write(&self.published, "published")?
            .insert((theme_id.clone(), scope.clone()), record.clone());
        log::info!("published '{}' (v{})", record.path, record.version);
        Ok(record)
    }

    /// The published master stylesheet URL for a scope. A pure read over
    /// stored metadata; never recomputes CSS.
    pub fn css_url(&self, theme_id: &ThemeId, scope: &Scope) -> Option<String> {
        self.published
            .read()
            .ok()?
            .get(&(theme_id.clone(), scope.clone()))
            .map(PublishRecord::css_url)
    }

    /// The published version for a scope. A pure read over stored metadata.
    pub fn css_version(&self, theme_id: &ThemeId, scope: &Scope) -> Option<i64> {
        self.published
            .read()
            .ok()?
            .get(&(theme_id.clone(), scope.clone()))
            .map(|record| record.version)
    }
}

fn lock_read<'a, T>(
    lock: &'a RwLock<T>,
    what: &str,
) -> Result<std::sync::RwLockReadGuard<'a, T>, EngineError> {
    lock.read()
        .map_err(|_| EngineError::Internal(format!("{} lock poisoned", what)))
}

fn lock_write<'a, T>(
    lock: &'a RwLock<T>,
    what: &str,
) -> Result<std::sync::RwLockWriteGuard<'a, T>, EngineError> {
    lock.write()
        .map_err(|_| EngineError::Internal(format!("{} lock poisoned", what)))
}
