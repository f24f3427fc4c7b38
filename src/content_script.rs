// content_script.rs — Page driver
//
// Ties the pieces together for one page: detects the host, injects the
// stylesheet, feeds every listing row (present at start or added later)
// through the rate shaper to the row processor, runs scheduled work as
// logical time advances, and reacts to settings changes.
//
// The host's event loop is modelled by three entry points:
//
//    pump     — a mutation-observer callback: new rows, watched attribute
//               changes, then settings notifications
//    advance  — let logical time pass, running timers as they come due
//    start    — the initial pass when the script is injected

use std::collections::HashSet;

use crate::config::{Config, SettingKey, Settings, SettingsStore};
use crate::dom::{Document, NodeId, SubtreeWatcher};
use crate::ehm::AppError;
use crate::icon_pack::IconPackCatalog;
use crate::provider::{CompiledProvider, OnAdd, Provider};
use crate::rate_shaper::{Admission, RateShaper, RowTask};
use crate::reference_tables::ReferenceTables;
use crate::resolver::IconResolver;
use crate::row_processor::{IconAssets, RowOutcome, RowProcessor};
use crate::scheduler::{Scheduler, Tick};
use crate::stylesheet;





////////////////////////////////////////////////////////////////////////////////

pub struct ContentScript<S: SettingsStore> {
    provider:     CompiledProvider,
    processor:    RowProcessor,
    shaper:       RateShaper,
    scheduler:    Scheduler<RowTask<NodeId>>,
    watcher:      Option<SubtreeWatcher>,
    watched_rows: HashSet<NodeId>,
    config:       Config,
    store:        S,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ContentScript
//
////////////////////////////////////////////////////////////////////////////////

impl<S: SettingsStore> ContentScript<S> {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  attach
    //
    //  Set up for the page at `address`.  Ok(None) when no provider claims
    //  the host; the script then stays inert.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn attach(address: &str, tables: ReferenceTables, store: S) -> Result<Option<Self>, AppError> {
        let Some (provider) = Provider::detect (address) else {
            tracing::debug!(target: "material_icons_ext::content_script", address, "no provider for page");
            return Ok (None);
        };

        tracing::info!(target: "material_icons_ext::content_script", %provider, "provider detected");

        let resolver = IconResolver::new (tables, IconPackCatalog::bundled());
        Self::for_provider (provider, resolver, store).map (Some)
    }





    pub fn for_provider(provider: Provider, resolver: IconResolver, store: S) -> Result<Self, AppError> {
        let config = Config::load (&store);

        Ok (ContentScript {
            provider:     CompiledProvider::compile (provider)?,
            processor:    RowProcessor::new (resolver, IconAssets::default()),
            shaper:       RateShaper::new (config.settings().rush_batch),
            scheduler:    Scheduler::new(),
            watcher:      None,
            watched_rows: HashSet::new(),
            config,
            store,
        })
    }





    pub fn with_assets(mut self, assets: IconAssets) -> Self {
        self.processor.set_assets (assets);
        self
    }

    pub fn set_rush_batch(&mut self, rush_batch: u32) {
        self.shaper.set_rush_batch (rush_batch);
    }

    pub fn provider(&self) -> Provider {
        self.provider.provider()
    }

    pub fn settings(&self) -> &Settings {
        self.config.settings()
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn now(&self) -> Tick {
        self.scheduler.now()
    }

    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Rows admitted since the last quiet period.
    pub fn executions_since_reset(&self) -> u32 {
        self.shaper.executions_since_reset()
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  start
    //
    //  Inject the stylesheet, publish the icon size, start watching <body>
    //  and observe every row already on the page.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn start(&mut self, doc: &mut Document) -> Result<(), AppError> {
        stylesheet::inject (doc)?;
        stylesheet::apply_size (doc, self.config.settings().icon_size);

        // Rows already present are found by the scan below.
        doc.take_mutations();
        self.watcher = Some (SubtreeWatcher::new (doc.body()));

        let rows = self.provider.rows (doc, doc.body());

        tracing::debug!(
            target: "material_icons_ext::content_script",
            rows = rows.len(),
            "initial scan"
        );

        for row in rows {
            self.observe_row (doc, row);
        }

        Ok (())
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  pump
    //
    //  Handle everything that happened since the last call.  Edits made
    //  while handling (our own icon insertions) surface on the next call.
    //
    //  A watched-attribute change re-runs its row on the spot, outside the
    //  rate shaper: it is one row the user just expanded, not part of a
    //  burst, and must neither wait nor count toward the rush batch.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn pump(&mut self, doc: &mut Document) {
        let Some (watcher) = self.watcher else {
            return;
        };

        let mutations = doc.take_mutations();

        for row in watcher.added_matches (doc, &mutations, self.provider.row_selector()) {
            self.observe_row (doc, row);
        }

        if let OnAdd::WatchAttribute (attribute) = self.provider.on_add() {
            let mut seen = HashSet::new();

            let changed: Vec<NodeId> = watcher
                .attribute_changes (doc, &mutations)
                .into_iter()
                .filter (|&(node, name)| name == attribute && self.watched_rows.contains (&node))
                .map (|(node, _)| node)
                .filter (|&node| seen.insert (node))
                .collect();

            for row in changed {
                self.run_row (doc, row);
            }
        }

        self.apply_setting_changes (doc);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  advance
    //
    //  Let `ticks` of logical time pass, running each task as it comes due.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn advance(&mut self, doc: &mut Document, ticks: Tick) {
        let deadline = self.scheduler.now().saturating_add (ticks);

        while let Some (task) = self.scheduler.next_due (deadline) {
            match task {
                RowTask::Replace (row) => {
                    self.run_row (doc, row);
                }
                RowTask::ResetCounter => self.shaper.on_quiet_period(),
            }
        }

        self.scheduler.advance_to (deadline);
    }





    fn observe_row(&mut self, doc: &mut Document, row: NodeId) {
        if let OnAdd::WatchAttribute (_) = self.provider.on_add() {
            self.watched_rows.insert (row);
        }

        if self.shaper.observe (row, &mut self.scheduler) == Admission::Rushed {
            self.run_row (doc, row);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  run_row
    //
    //  One processing run.  Rows that left the page since they were queued
    //  are skipped.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn run_row(&mut self, doc: &mut Document, row: NodeId) -> Option<RowOutcome> {
        if !doc.is_connected (row) {
            self.watched_rows.remove (&row);
            tracing::trace!(target: "material_icons_ext::content_script", ?row, "row left the page");
            return None;
        }

        let pack = self.config.settings().icon_pack;
        Some (self.processor.process (doc, &self.provider, row, pack))
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_setting_changes
    //
    //  A size change restyles the page immediately through the body
    //  attribute.  A pack change is only picked up by rows processed from
    //  now on; icons already on the page keep their pack.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_setting_changes(&mut self, doc: &mut Document) {
        for change in self.store.take_changes() {
            match self.config.apply_store_value (&change.key, &change.value) {
                Some (SettingKey::IconSize) => {
                    let size = self.config.settings().icon_size;
                    tracing::info!(target: "material_icons_ext::content_script", %size, "icon size changed");
                    stylesheet::apply_size (doc, size);
                }

                Some (SettingKey::IconPack) => {
                    let pack = self.config.settings().icon_pack;
                    tracing::info!(target: "material_icons_ext::content_script", %pack, "icon pack changed");
                }

                None => {}
            }
        }
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemorySettingsStore;

    #[test]
    fn unknown_hosts_stay_inert() {
        let script = ContentScript::attach(
            "https://example.org/repo",
            ReferenceTables::with_defaults(),
            MemorySettingsStore::new(),
        )
        .unwrap();
        assert!(script.is_none());
    }

    #[test]
    fn attach_reads_rush_batch_default_and_settings() {
        let store = MemorySettingsStore::with_values([("iconSize", "sm"), ("iconPack", "nest")]);
        let script = ContentScript::attach("https://gitlab.com/a/b", ReferenceTables::with_defaults(), store)
            .unwrap()
            .unwrap();

        assert_eq!(script.provider(), Provider::GitLab);
        assert_eq!(script.settings().icon_size, crate::config::IconSize::Sm);
        assert_eq!(script.settings().icon_pack, crate::icon_pack::ActivePack::Nest);
        assert_eq!(script.pending_tasks(), 0);
    }

    #[test]
    fn pump_before_start_does_nothing() {
        let mut script = ContentScript::attach(
            "https://github.com/a/b",
            ReferenceTables::with_defaults(),
            MemorySettingsStore::new(),
        )
        .unwrap()
        .unwrap();

        let mut doc = Document::new();
        let body = doc.body();
        doc.append_element(body, "div", &[("class", "react-directory-filename-column")]);
        script.pump(&mut doc);

        assert_eq!(script.pending_tasks(), 0);
    }
}
