/// A header value fixture to benchmark against.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    size: TestSize,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, size: TestSize, file: TestFile) -> Self {
        Self { name, size, file }
    }

    pub fn small(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestSize::Small, file)
    }

    pub fn large(name: &'static str, file: TestFile) -> Self {
        Self::new(name, TestSize::Large, file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> TestSize {
        self.size
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    /// The header value, without the trailing newline of the fixture file.
    pub fn header_value(&self) -> &'static str {
        self.file.content().trim_end_matches(['\r', '\n'])
    }

    /// Benchmark id in the form `<size>/<name>`.
    pub fn id(&self) -> String {
        format!("{}/{}", self.size.as_str(), self.name)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TestSize {
    Small,
    Large,
}

impl TestSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestSize::Small => "small",
            TestSize::Large => "large",
        }
    }
}
