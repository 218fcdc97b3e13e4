use std::collections::HashMap;

/// Mnemonic of a dispatched sequence, used as the telemetry counter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceCode {
    Cuu,
    Cud,
    Cuf,
    Cub,
    Cnl,
    Cpl,
    Cha,
    Cup,
    Cht,
    Cbt,
    Ed,
    El,
    Ich,
    Dch,
    Ech,
    Il,
    Dl,
    Su,
    Sd,
    Tbc,
    Vpa,
    Hpr,
    Vpr,
    Rep,
    Da,
    Da2,
    Da3,
    Dsr,
    Decset,
    Decrst,
    Sgr,
    Decstbm,
    Decscusr,
    Decstr,
    DttermWm,
    AnsiSysSc,
    AnsiSysRc,
    Decsc,
    Decrc,
    Deckpam,
    Deckpnm,
    Nel,
    Ind,
    Ri,
    Hts,
    Ris,
    Ss2,
    Ss3,
    Ls2,
    Ls3,
    Ls1r,
    Ls2r,
    Ls3r,
    Decaln,
    Docs,
    DesignateG0,
    DesignateG1,
    DesignateG2,
    DesignateG3,
    OscWindowTitle,
    OscColorTable,
    OscForegroundColor,
    OscBackgroundColor,
    OscCursorColor,
    OscClipboard,
    OscResetCursorColor,
    OscHyperlink,
}

/// Per-engine counters of dispatched sequences.
///
/// Telemetry is side-effect-only; logging a code never fails and never
/// influences dispatch. The block is owned by the engine rather than a
/// process-wide singleton, so hosts embedding several engines get separate
/// counts.
#[derive(Debug, Default)]
pub struct SequenceTelemetry {
    counts: HashMap<SequenceCode, u64>,
}

impl SequenceTelemetry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, code: SequenceCode) {
        *self.counts.entry(code).or_insert(0) += 1;
    }

    /// How often `code` has been dispatched so far.
    #[must_use]
    pub fn count(&self, code: SequenceCode) -> u64 {
        self.counts.get(&code).copied().unwrap_or(0)
    }
}
