#[cfg(test)]
testbench::test_main!(tests::bench);
