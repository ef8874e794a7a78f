//! `shgate dump` specs

use crate::prelude::*;

#[test]
fn dump_prints_tagged_tree() {
    cli()
        .args(&["dump", "ls"])
        .passes()
        .stdout_eq(
            "<program><complete_command><simple_command><word>\
             <unquoted_literal>ls</unquoted_literal>\
             </word></simple_command></complete_command></program>\n",
        );
}

#[test]
fn dump_json_uses_type_and_contents() {
    let json = cli().args(&["dump", "-o", "json", "a | b"]).passes().json();
    assert_eq!(json["type"], "program");
    let pipeline = &json["contents"][0]["contents"][0];
    assert_eq!(pipeline["type"], "pipeline");
    assert_eq!(pipeline["contents"].as_array().unwrap().len(), 2);
}
