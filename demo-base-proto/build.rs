use anyhow::Result;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../protos/demo_base_proto/student.proto");

    #[cfg(feature = "regen")]
    {
        use std::fs;

        let path = "src/pb";
        fs::create_dir_all(path)?;

        prost_build::Config::new()
            .out_dir(path)
            .type_attribute("Student", r#"#[derive(serde::Serialize, serde::Deserialize)]"#)
            .type_attribute("Student", r#"#[serde(default, deny_unknown_fields)]"#)
            .type_attribute("Student", r#"#[derive(derive_builder::Builder)]"#)
            .type_attribute("Student", r#"#[builder(setter(into), default)]"#)
            .field_attribute(
                "Student.name",
                r#"#[serde(deserialize_with = "crate::abi::text")]"#,
            )
            .field_attribute(
                "Student.books",
                r#"#[serde(deserialize_with = "crate::abi::texts")]"#,
            )
            .field_attribute(
                "Student.books",
                r#"#[builder(setter(each(name = "book", into)))]"#,
            )
            .compile_protos(&["../protos/demo_base_proto/student.proto"], &["../protos"])?;
    }

    Ok(())
}
