// src/commands/registry.rs
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::types::Translator;

pub struct TranslatorRegistry {
    commands: HashMap<&'static str, Box<dyn Translator>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    pub fn register(&mut self, translator: Box<dyn Translator>) {
        for alias in translator.aliases() {
            self.aliases.insert(alias, translator.name());
        }
        self.commands.insert(translator.name(), translator);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Translator> {
        if let Some(t) = self.commands.get(name) {
            return Some(t.as_ref());
        }
        self.aliases
            .get(name)
            .and_then(|primary| self.commands.get(primary))
            .map(|t| t.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Look up a translator in the process-wide registry
pub fn lookup(name: &str) -> Option<&'static dyn Translator> {
    REGISTRY.get(name)
}

lazy_static! {
    static ref REGISTRY: TranslatorRegistry = {
        let mut registry = TranslatorRegistry::new();
        register_all(&mut registry);
        registry
    };
}

fn register_all(registry: &mut TranslatorRegistry) {
    use super::*;

    // Search & navigation
    registry.register(Box::new(grep::GrepTranslator));
    registry.register(Box::new(find::FindTranslator));
    registry.register(Box::new(ls::LsTranslator));
    registry.register(Box::new(cd_cmd::CdTranslator));
    registry.register(Box::new(pwd_cmd::PwdTranslator));
    registry.register(Box::new(which_cmd::WhichTranslator));

    // Text processing
    registry.register(Box::new(cat::CatTranslator));
    registry.register(Box::new(head::HeadTranslator));
    registry.register(Box::new(tail::TailTranslator));
    registry.register(Box::new(wc::WcTranslator));
    registry.register(Box::new(sort_cmd::SortTranslator));
    registry.register(Box::new(uniq::UniqTranslator));
    registry.register(Box::new(cut::CutTranslator));
    registry.register(Box::new(tr_cmd::TrTranslator));
    registry.register(Box::new(tee::TeeTranslator));
    registry.register(Box::new(diff_cmd::DiffTranslator));
    registry.register(Box::new(xargs::XargsTranslator));
    registry.register(Box::new(sed::SedTranslator));
    registry.register(Box::new(awk::AwkTranslator));
    registry.register(Box::new(echo::EchoTranslator));
    registry.register(Box::new(printf_cmd::PrintfTranslator));

    // Conditionals
    registry.register(Box::new(test_cmd::TestTranslator));

    // Filesystem
    registry.register(Box::new(rm::RmTranslator));
    registry.register(Box::new(rm::RmdirTranslator));
    registry.register(Box::new(mkdir::MkdirTranslator));
    registry.register(Box::new(touch::TouchTranslator));
    registry.register(Box::new(cp::CpTranslator));
    registry.register(Box::new(mv::MvTranslator));
    registry.register(Box::new(ln::LnTranslator));
    registry.register(Box::new(basename::BasenameTranslator));
    registry.register(Box::new(dirname::DirnameTranslator));
    registry.register(Box::new(realpath_cmd::RealpathTranslator));
    registry.register(Box::new(realpath_cmd::ReadlinkTranslator));
    registry.register(Box::new(chmod::ChmodTranslator));
    registry.register(Box::new(archive_cmd::ZipTranslator));
    registry.register(Box::new(archive_cmd::UnzipTranslator));
    registry.register(Box::new(du_cmd::DuTranslator));
    registry.register(Box::new(du_cmd::DfTranslator));
    registry.register(Box::new(mktemp_cmd::MktempTranslator));

    // Network
    registry.register(Box::new(curl::CurlTranslator));
    registry.register(Box::new(curl::WgetTranslator));
    registry.register(Box::new(jq_cmd::JqTranslator));

    // Shell & environment
    registry.register(Box::new(export_cmd::ExportTranslator));
    registry.register(Box::new(export_cmd::UnsetTranslator));
    registry.register(Box::new(export_cmd::EnvTranslator));
    registry.register(Box::new(true_cmd::TrueTranslator));
    registry.register(Box::new(true_cmd::FalseTranslator));
    registry.register(Box::new(exit_cmd::ExitTranslator));
    registry.register(Box::new(source_cmd::SourceTranslator));
    registry.register(Box::new(sudo_cmd::SudoTranslator));
    registry.register(Box::new(sudo_cmd::NohupTranslator));
    registry.register(Box::new(history_cmd::HistoryTranslator));
    registry.register(Box::new(history_cmd::ClearTranslator));

    // Processes & system
    registry.register(Box::new(ps_cmd::PsTranslator));
    registry.register(Box::new(kill_cmd::KillTranslator));
    registry.register(Box::new(kill_cmd::PkillTranslator));
    registry.register(Box::new(kill_cmd::PgrepTranslator));
    registry.register(Box::new(lsof_cmd::LsofTranslator));
    registry.register(Box::new(sleep_cmd::SleepTranslator));
    registry.register(Box::new(date_cmd::DateTranslator));
    registry.register(Box::new(seq_cmd::SeqTranslator));
    registry.register(Box::new(whoami_cmd::WhoamiTranslator));
    registry.register(Box::new(hostname_cmd::HostnameTranslator));
    registry.register(Box::new(uname_cmd::UnameTranslator));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_dispatch() {
        assert!(lookup("grep").is_some());
        assert!(lookup("ls").is_some());
        assert!(lookup("rm").is_some());
    }

    #[test]
    fn test_aliases_resolve() {
        assert!(lookup("egrep").is_some());
        assert!(lookup("fgrep").is_some());
        assert!(lookup("[").is_some());
        assert!(lookup(".").is_some());
    }

    #[test]
    fn test_unknown_commands_pass_through() {
        assert!(lookup("git").is_none());
        assert!(lookup("npm").is_none());
        assert!(lookup("python").is_none());
    }
}
