#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "save_note",
        summary: "Save (or overwrite) a markdown note by title.",
    },
    ToolDescriptor {
        name: "list_notes",
        summary: "List saved note filenames.",
    },
    ToolDescriptor {
        name: "read_note",
        summary: "Read a saved note by title.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut out = String::from(
        "Notes server: markdown notes stored one file per title (lowercased, whitespace -> '-', .md).\nTools:\n",
    );
    for tool in TOOL_CATALOG {
        out.push_str(&format!("- {}: {}\n", tool.name, tool.summary));
    }
    out.push_str("Saving an existing title replaces the note. Reading a missing title is not an error.");
    out
}
