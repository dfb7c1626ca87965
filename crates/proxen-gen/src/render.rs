//! C# text formatter for [`ProxyArtifact`].
//!
//! Tab indentation, `\n` line endings. Every top-level slot is followed by a
//! blank line, including empty ones, so the layout depends only on the source
//! module's shape.

use std::fmt::{self, Display, Formatter};

use crate::plan::{
    ArgumentBlock, DispatchTarget, ForwardCall, MethodBody, MethodEmission, NamespaceBlock,
    ProxyArtifact, ProxyClassSpec, RootSlot,
};

impl Display for ProxyArtifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner)?;
        writeln!(f)?;

        for import in &self.imports {
            writeln!(f, "using {import};")?;
        }
        writeln!(f)?;

        for slot in &self.slots {
            if let RootSlot::Namespace(block) = slot {
                write!(f, "{block}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for NamespaceBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "namespace {}", self.name)?;
        writeln!(f, "{{")?;
        for class in &self.classes {
            write!(f, "{class}")?;
        }
        writeln!(f, "}}")
    }
}

impl Display for ProxyClassSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            writeln!(f, "\t{annotation}")?;
        }
        writeln!(
            f,
            "\tpublic class {} : {}, {}",
            self.class_name, self.base_type, self.interface_type
        )?;
        writeln!(f, "\t{{")?;
        for method in &self.methods {
            write!(f, "{method}")?;
        }
        writeln!(f, "\t}}")
    }
}

impl Display for MethodEmission {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            writeln!(f, "\t\t{annotation}")?;
        }
        writeln!(f, "\t\tpublic {}", self.signature)?;
        writeln!(f, "\t\t{{")?;
        match &self.body {
            MethodBody::Forward(call) => {
                writeln!(f, "\t\t\ttry {{")?;
                writeln!(f, "\t\t\t\treturn {call};")?;
                writeln!(f, "\t\t\t}} catch (Exception) {{ throw; }}")?;
            }
            MethodBody::Unsupported { message } => {
                writeln!(f, "\t\t\tthrow new NotImplementedException({message});")?;
            }
        }
        writeln!(f, "\t\t}}")
    }
}

impl Display for ForwardCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}({}", self.dispatcher, self.target, self.method_handle)?;
        if let Some(arguments) = &self.arguments {
            write!(f, ", {arguments}")?;
        }
        write!(f, ")")
    }
}

impl Display for DispatchTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "CallVoidMethodAsync"),
            Self::WithResult(types) => write!(f, "CallMethodAsync<{}>", types.join(", ")),
        }
    }
}

impl Display for ArgumentBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(types) = &self.type_arguments {
            let handles: Vec<String> = types.iter().map(|t| format!("typeof({t})")).collect();
            write!(f, "new Type[] {{ {} }}, ", handles.join(", "))?;
        }
        write!(f, "new object[] {{ {} }}", self.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn call(target: DispatchTarget, arguments: Option<ArgumentBlock>) -> ForwardCall {
        ForwardCall {
            dispatcher: "D".to_string(),
            target,
            method_handle: "M()".to_string(),
            arguments,
        }
    }

    #[test]
    fn void_call_without_arguments() {
        assert_eq!(
            call(DispatchTarget::Void, None).to_string(),
            "D.CallVoidMethodAsync(M())"
        );
    }

    #[test]
    fn value_call_lists_every_result_type() {
        let target = DispatchTarget::WithResult(vec!["string".to_string(), "int".to_string()]);
        assert_eq!(
            call(target, None).to_string(),
            "D.CallMethodAsync<string, int>(M())"
        );
    }

    #[test]
    fn type_and_value_arrays() {
        let block = ArgumentBlock {
            type_arguments: Some(vec!["T".to_string(), "U".to_string()]),
            values: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(
            call(DispatchTarget::Void, Some(block)).to_string(),
            "D.CallVoidMethodAsync(M(), new Type[] { typeof(T), typeof(U) }, new object[] { a, b })"
        );
    }

    #[test]
    fn empty_value_array_keeps_its_braces() {
        let block = ArgumentBlock {
            type_arguments: Some(vec!["T".to_string()]),
            values: Vec::new(),
        };
        assert_eq!(
            block.to_string(),
            "new Type[] { typeof(T) }, new object[] {  }"
        );
    }

    #[test]
    fn unsupported_method_body() {
        let method = MethodEmission {
            annotations: vec!["[A]".to_string()],
            signature: "void Sync()".to_string(),
            body: MethodBody::Unsupported {
                message: "Msg".to_string(),
            },
        };
        assert_eq!(
            method.to_string(),
            "\t\t[A]\n\t\tpublic void Sync()\n\t\t{\n\t\t\tthrow new NotImplementedException(Msg);\n\t\t}\n"
        );
    }

    #[test]
    fn empty_slots_still_emit_a_blank_line() {
        let artifact = ProxyArtifact {
            banner: "// banner".to_string(),
            imports: vec!["System".to_string()],
            slots: vec![
                RootSlot::Empty,
                RootSlot::Namespace(NamespaceBlock {
                    name: "A.B.ProxyGenerated".to_string(),
                    classes: Vec::new(),
                }),
            ],
        };
        assert_eq!(
            artifact.to_string(),
            "// banner\n\nusing System;\n\n\nnamespace A.B.ProxyGenerated\n{\n}\n\n"
        );
    }
}
