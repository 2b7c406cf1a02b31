//! Pipeline job XML document
//!
//! Wraps a rendered pipeline script in the `flow-definition` envelope that
//! Jenkins' `createItem` endpoint expects for a sandboxed CPS pipeline job.

/// Description stamped on every job created by this tool
pub const DEFAULT_DESCRIPTION: &str = "Pipeline job created by MRTUX tool";

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// A complete `config.xml` for a pipeline job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfigDocument {
    xml: String,
}

impl JobConfigDocument {
    /// Build the document for a rendered pipeline script
    ///
    /// The script is carried verbatim inside a CDATA section. Any `]]>` in
    /// the script is split across two adjacent sections so the document
    /// stays well-formed and the parsed script text is unchanged.
    pub fn new(script: &str) -> Self {
        let xml = format!(
            r#"<?xml version='1.1' encoding='UTF-8'?>
<flow-definition plugin="workflow-job">
  <actions/>
  <description>{description}</description>
  <keepDependencies>false</keepDependencies>
  <properties/>
  <definition class="org.jenkinsci.plugins.workflow.cps.CpsFlowDefinition" plugin="workflow-cps">
    <script>{script}</script>
    <sandbox>true</sandbox>
  </definition>
  <triggers/>
  <disabled>false</disabled>
</flow-definition>"#,
            description = DEFAULT_DESCRIPTION,
            script = cdata(script),
        );

        Self { xml }
    }

    /// The serialized XML
    pub fn as_str(&self) -> &str {
        &self.xml
    }

    pub fn into_string(self) -> String {
        self.xml
    }
}

/// Wrap text in one or more CDATA sections
fn cdata(text: &str) -> String {
    let split = format!("]]{CDATA_CLOSE}{CDATA_OPEN}>");
    format!(
        "{CDATA_OPEN}{}{CDATA_CLOSE}",
        text.replace(CDATA_CLOSE, &split)
    )
}
