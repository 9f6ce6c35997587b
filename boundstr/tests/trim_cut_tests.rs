use boundstr::{
    content, copy, left_cut, left_trim, left_trim_blanks, right_cut, right_trim,
    right_trim_blanks, trim, trim_blanks,
};

#[test]
fn left_trim_skips_leading_blanks() {
    let ret = left_trim_blanks(b" \t  \n \x0b \r   Hello\n\r\n\t \x0b");
    assert_eq!(b"Hello\n\r\n\t \x0b", ret);
}

#[test]
fn left_trim_of_empty_string() {
    assert_eq!(b"", left_trim_blanks(b""));
}

#[test]
fn left_trim_with_custom_cutset() {
    let ret = left_trim(b"zzzzemptyzzzz", b"z");
    assert_eq!(b"emptyzzzz", ret);
}

#[test]
fn left_trim_everything() {
    assert_eq!(b"", left_trim(b"aaaa", b"a"));
}

#[test]
fn right_trim_terminates_in_place() {
    let mut buf = [0u8; 32];
    copy(&mut buf, b" \t  \n  \r \x0b  Hello\n\r\n\t \x0b");

    let ret = right_trim_blanks(&mut buf);
    assert_eq!(b" \t  \n  \r \x0b  Hello", content(ret));
}

#[test]
fn right_trim_of_empty_string() {
    let mut buf = [0u8; 4];
    let ret = right_trim_blanks(&mut buf);
    assert_eq!(b"", content(ret));
}

#[test]
fn right_trim_with_custom_cutset() {
    let mut buf = [0u8; 16];
    copy(&mut buf, b"zzzzemptyzzzz");

    let ret = right_trim(&mut buf, b"z");
    assert_eq!(b"zzzzempty", content(ret));
}

#[test]
fn trim_takes_both_ends() {
    let mut buf = [0u8; 32];
    copy(&mut buf, b" \t  \n  \r   Hello\n\r\n\t ");

    assert_eq!(b"Hello", trim_blanks(&mut buf));
}

#[test]
fn trim_of_empty_string() {
    let mut buf = [0u8; 4];
    assert_eq!(b"", trim_blanks(&mut buf));
}

#[test]
fn trim_with_custom_cutset() {
    let mut buf = [0u8; 16];
    copy(&mut buf, b"aaaaemptyzzzz");

    assert_eq!(b"empty", trim(&mut buf, b"az"));
}

#[test]
fn left_cut_removes_an_exact_prefix() {
    let ret = left_cut(b"http://www.linux.org", b"http://");
    assert_eq!(b"www.linux.org", ret);
}

#[test]
fn left_cut_leaves_a_non_prefix_alone() {
    let ret = left_cut(b"xhttp://www.linux.org", b"http://");
    assert_eq!(b"xhttp://www.linux.org", ret);
}

#[test]
fn right_cut_removes_an_exact_suffix() {
    let mut buf = [0u8; 32];
    copy(&mut buf, b"mynameisnobody.txt");

    let ret = right_cut(&mut buf, b".txt");
    assert_eq!(b"mynameisnobody", content(ret));
}

#[test]
fn right_cut_leaves_a_non_suffix_alone() {
    let mut buf = [0u8; 32];
    copy(&mut buf, b"mynameisnobody.txt");

    let ret = right_cut(&mut buf, b".tx");
    assert_eq!(b"mynameisnobody.txt", content(ret));
}
