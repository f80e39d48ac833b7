// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Arabic catalog data.
//!
//! Keys mirror the English catalog one-to-one; `catalog::parity_report`
//! flags any divergence at load time.

pub(super) const MESSAGES: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "الرئيسية"),
	("nav.about", "من نحن"),
	("nav.howItWorks", "كيف يعمل"),
	("nav.watchVideo", "شاهد الفيديو"),
	("nav.technologies", "التقنيات"),
	("nav.contact", "تواصل معنا"),
	("nav.dashboard", "لوحة التحكم"),
	("nav.cases", "القضايا"),
	("nav.login", "تسجيل الدخول"),
	("nav.logout", "تسجيل الخروج"),
	("nav.profile", "الملف الشخصي"),
	("nav.settings", "الإعدادات"),
	// Homepage
	("home.title", "مدقق"),
	("home.subtitle", "نظام كشف الاحتيال المدعوم بالذكاء الاصطناعي"),
	(
		"home.description",
		"تقنية الذكاء الاصطناعي المتقدمة لكشف الاحتيال المالي والتلاعب في التوظيف لوزارة الموارد البشرية والتنمية الاجتماعية",
	),
	("home.getStarted", "ابدأ الآن"),
	("home.learnMore", "اعرف المزيد"),
	("home.watchDemo", "شاهد العرض التوضيحي"),
	("home.features.title", "ميزات متقدمة لكشف الاحتيال"),
	(
		"home.features.subtitle",
		"أدوات شاملة مدعومة بالذكاء الاصطناعي مصممة خصيصاً لكشف ومنع الاحتيال الحكومي",
	),
	("home.stats.title", "نتائج تجريبية جيدة وتأثير فعال"),
	(
		"home.stats.subtitle",
		"أثبت مدقق تحسينات كبيرة في كفاءة ودقة كشف الاحتيال",
	),
	// About
	("about.title", "حول نظام مدقق"),
	("about.subtitle", "ريادة مستقبل كشف الاحتيال بالذكاء الاصطناعي"),
	(
		"about.description",
		"مدقق هو نظام متقدم لكشف الاحتيال مدعوم بالذكاء الاصطناعي تم تطويره خصيصاً لوزارة الموارد البشرية والتنمية الاجتماعية لمكافحة الاحتيال المالي والتلاعب في التوظيف",
	),
	("about.mission.title", "مهمتنا"),
	(
		"about.mission.description",
		"حماية الموارد العامة وضمان الشفافية في الخدمات الحكومية من خلال تقنية الذكاء الاصطناعي المتطورة",
	),
	("about.vision.title", "رؤيتنا"),
	(
		"about.vision.description",
		"أن نكون النظام الرائد لكشف الاحتيال في المنطقة، ودعم رؤية المملكة العربية السعودية 2030",
	),
	("about.systemFeatures", "مميزات النظام"),
	(
		"about.systemFeaturesDesc",
		"نظام متكامل يجمع بين أحدث التقنيات والخبرات المتخصصة",
	),
	("about.provenStats", "إحصائيات مثبتة"),
	(
		"about.provenStatsDesc",
		"أرقام تؤكد فعالية النظام في كشف ومنع الاحتيال",
	),
	// How It Works
	("howItWorks.title", "كيف يعمل مدقق"),
	(
		"howItWorks.subtitle",
		"تقنية الذكاء الاصطناعي المتقدمة في خطوات بسيطة",
	),
	("howItWorks.step1.title", "جمع البيانات"),
	(
		"howItWorks.step1.description",
		"جمع وتحليل المستندات والبيانات المالية من مصادر متعددة",
	),
	("howItWorks.step2.title", "التحليل بالذكاء الاصطناعي"),
	(
		"howItWorks.step2.description",
		"خوارزميات التعلم الآلي المتقدمة تكتشف الأنماط والشذوذ",
	),
	("howItWorks.step3.title", "تقييم المخاطر"),
	(
		"howItWorks.step3.description",
		"إنشاء درجات مخاطر شاملة وتقييمات احتمالية الاحتيال",
	),
	("howItWorks.step4.title", "الإجراءات والتقارير"),
	(
		"howItWorks.step4.description",
		"توفير رؤى قابلة للتنفيذ وتقارير مفصلة لصناع القرار",
	),
	// Technologies
	("technologies.title", "التقنيات المتقدمة"),
	(
		"technologies.subtitle",
		"أحدث تقنيات الذكاء الاصطناعي والتعلم الآلي",
	),
	("technologies.ai.title", "الذكاء الاصطناعي"),
	(
		"technologies.ai.description",
		"خوارزميات التعلم العميق للتعرف على الأنماط وكشف الشذوذ",
	),
	("technologies.ml.title", "التعلم الآلي"),
	(
		"technologies.ml.description",
		"نماذج التعلم المُشرف وغير المُشرف لكشف الاحتيال",
	),
	("technologies.nlp.title", "معالجة اللغة الطبيعية"),
	(
		"technologies.nlp.description",
		"قدرات تحليل النصوص والتحقق من المستندات",
	),
	("technologies.blockchain.title", "أمان البلوك تشين"),
	(
		"technologies.blockchain.description",
		"مسارات تدقيق غير قابلة للتغيير والتحقق الآمن من البيانات",
	),
	// Contact
	("contact.title", "تواصل معنا"),
	("contact.subtitle", "تواصل مع فريقنا"),
	(
		"contact.address",
		"وزارة الموارد البشرية والتنمية الاجتماعية، الرياض، المملكة العربية السعودية",
	),
	("contact.phone", "4567 123 11 966+"),
	("contact.email", "info@mhrsd.gov.sa"),
	("contact.form.name", "الاسم الكامل"),
	("contact.form.email", "عنوان البريد الإلكتروني"),
	("contact.form.subject", "الموضوع"),
	("contact.form.message", "الرسالة"),
	("contact.form.send", "إرسال الرسالة"),
	// Video
	("video.title", "شاهد مدقق في العمل"),
	(
		"video.subtitle",
		"اكتشف كيف يكشف نظامنا الذكي الاحتيال في الوقت الفعلي",
	),
	("video.duration", "المدة: 3:45"),
	// Login
	("login.title", "تسجيل الدخول إلى مدقق"),
	("login.subtitle", "الوصول إلى لوحة تحكم كشف الاحتيال"),
	("login.email", "عنوان البريد الإلكتروني"),
	("login.password", "كلمة المرور"),
	("login.rememberMe", "تذكرني"),
	("login.forgotPassword", "نسيت كلمة المرور؟"),
	("login.signIn", "تسجيل الدخول"),
	("login.showPassword", "إظهار كلمة المرور"),
	("login.hidePassword", "إخفاء كلمة المرور"),
	("login.demo.title", "بيانات تجريبية"),
	("login.demo.email", "البريد الإلكتروني: admin@mhrsd.gov.sa"),
	("login.demo.password", "كلمة المرور: admin123"),
	// Dashboard
	("dashboard.title", "لوحة تحكم كشف الاحتيال"),
	(
		"dashboard.subtitle",
		"مراقبة وتحليل أنشطة كشف الاحتيال في الوقت الفعلي",
	),
	("dashboard.overview", "نظرة عامة"),
	("dashboard.totalCases", "إجمالي القضايا"),
	("dashboard.activeCases", "القضايا النشطة"),
	("dashboard.resolvedCases", "القضايا المحلولة"),
	("dashboard.riskScore", "متوسط درجة المخاطر"),
	("dashboard.recentCases", "القضايا الحديثة"),
	("dashboard.uploadCase", "رفع قضية جديدة"),
	("dashboard.viewAll", "عرض جميع القضايا"),
	("dashboard.quickActions", "إجراءات سريعة"),
	("dashboard.systemStatus", "حالة النظام"),
	(
		"dashboard.recentCasesDesc",
		"أحدث قضايا كشف الاحتيال ونتائج تحليلها",
	),
	("dashboard.analysisEngine", "محرك التحليل"),
	("dashboard.activeUsers", "المستخدمون النشطون"),
	("dashboard.processingQueue", "طابور المعالجة"),
	("dashboard.database", "قاعدة البيانات"),
	("dashboard.online", "متصل"),
	("dashboard.healthy", "صحية"),
	("dashboard.cases", "قضايا"),
	("dashboard.performanceMetrics", "مقاييس الأداء"),
	("dashboard.detectionAccuracy", "دقة الكشف"),
	("dashboard.processingSpeed", "سرعة المعالجة"),
	("dashboard.systemUsage", "استخدام النظام"),
	("dashboard.fromLastMonth", "من الشهر الماضي"),
	("dashboard.viewAnalytics", "عرض التحليلات"),
	("dashboard.generateReport", "إنشاء تقرير"),
	// Cases
	("cases.upload", "رفع قضية"),
	("cases.analyze", "تحليل بالذكاء الاصطناعي"),
	("cases.riskLevel", "مستوى المخاطر"),
	("cases.status", "الحالة"),
	("cases.date", "التاريخ"),
	("cases.id", "رقم القضية"),
	("cases.title", "عنوان القضية"),
	("cases.category", "الفئة"),
	("cases.priority", "الأولوية"),
	("cases.description", "الوصف"),
	("cases.documents", "المستندات"),
	("cases.timeline", "الجدول الزمني"),
	("cases.findings", "النتائج الرئيسية"),
	("cases.recommendations", "التوصيات"),
	("cases.high", "مخاطر عالية"),
	("cases.medium", "مخاطر متوسطة"),
	("cases.low", "مخاطر منخفضة"),
	("cases.pending", "قيد الانتظار"),
	("cases.completed", "مكتملة"),
	("cases.underReview", "قيد المراجعة"),
	("cases.escalated", "مُصعدة"),
	("cases.closed", "مغلقة"),
	("cases.management", "إدارة القضايا"),
	("cases.managementDesc", "عرض وإدارة جميع قضايا كشف الاحتيال"),
	("cases.searchFilter", "البحث والتصفية"),
	("cases.searchPlaceholder", "البحث في القضايا..."),
	("cases.allStatuses", "جميع الحالات"),
	("cases.allRiskLevels", "جميع مستويات المخاطر"),
	("cases.highRisk", "مخاطر عالية"),
	("cases.mediumRisk", "مخاطر متوسطة"),
	("cases.lowRisk", "مخاطر منخفضة"),
	("cases.advancedFilter", "تصفية متقدمة"),
	("cases.casesList", "قائمة القضايا"),
	("cases.showing", "عرض"),
	("cases.of", "من أصل"),
	("cases.assignedTo", "المسؤول"),
	("cases.actions", "الإجراءات"),
	("cases.view", "عرض"),
	// Common
	("common.loading", "جاري التحميل..."),
	("common.error", "خطأ"),
	("common.success", "نجح"),
	("common.warning", "تحذير"),
	("common.info", "معلومات"),
	("common.cancel", "إلغاء"),
	("common.save", "حفظ"),
	("common.delete", "حذف"),
	("common.edit", "تعديل"),
	("common.view", "عرض"),
	("common.search", "بحث"),
	("common.filter", "تصفية"),
	("common.export", "تصدير"),
	("common.import", "استيراد"),
	("common.download", "تحميل"),
	("common.upload", "رفع"),
	("common.refresh", "تحديث"),
	("common.back", "رجوع"),
	("common.next", "التالي"),
	("common.previous", "السابق"),
	("common.close", "إغلاق"),
	("common.confirm", "تأكيد"),
	("common.yes", "نعم"),
	("common.no", "لا"),
	// Errors
	("error.general", "حدث خطأ غير متوقع"),
	("error.network", "خطأ في الاتصال بالشبكة"),
	("error.unauthorized", "وصول غير مصرح به"),
	("error.notFound", "الصفحة غير موجودة"),
	("error.validation", "يرجى التحقق من المدخلات"),
	("error.upload", "فشل في رفع الملف"),
	("error.analysis", "فشل في التحليل"),
	("error.invalidLocale", "رمز لغة غير مدعوم"),
	// Success Messages
	("success.login", "تم تسجيل الدخول بنجاح"),
	("success.logout", "تم تسجيل الخروج بنجاح"),
	("success.upload", "تم رفع الملف بنجاح"),
	("success.analysis", "تم التحليل بنجاح"),
	("success.save", "تم حفظ البيانات بنجاح"),
	("success.message.sent", "تم إرسال الرسالة بنجاح"),
	// Stats Section
	("stats.detectionAccuracy", "دقة الكشف"),
	(
		"stats.detectionAccuracyDesc",
		"معدل دقة كشف الاحتيال والأنشطة المشبوهة",
	),
	("stats.processingSpeed", "تسريع المعالجة"),
	(
		"stats.processingSpeedDesc",
		"تقليل وقت معالجة القضايا والتحليل",
	),
	("stats.monitoring", "المراقبة"),
	(
		"stats.monitoringDesc",
		"مراقبة مستمرة على مدار الساعة طوال أيام الأسبوع",
	),
	("stats.analyzedCases", "قضية محللة"),
	(
		"stats.analyzedCasesDesc",
		"إجمالي قضايا الاحتيال المعالجة بنجاح",
	),
	// Features Section
	("features.advancedDetection", "كشف الاحتيال المتقدم"),
	(
		"features.advancedDetectionDesc",
		"خوارزميات متطورة تحلل الأنماط وتكتشف الأنشطة الاحتيالية بدقة عالية ومعدلات خطأ منخفضة",
	),
	("features.governmentSecurity", "الأمان الحكومي"),
	(
		"features.governmentSecurityDesc",
		"إجراءات أمنية على مستوى المؤسسات تضمن حماية البيانات والامتثال للوائح التنظيمية",
	),
	("features.instantProcessing", "المعالجة الفورية"),
	(
		"features.instantProcessingDesc",
		"تحليل فوري وتنبيهات سريعة تمكن من الاستجابة السريعة لحالات الاحتيال المحتملة",
	),
	("features.bilingualSupport", "الدعم ثنائي اللغة"),
	(
		"features.bilingualSupportDesc",
		"دعم كامل للغتين العربية والإنجليزية لتجربة مستخدم سلسة ومتكاملة",
	),
	("features.multiUserAccess", "الوصول متعدد المستخدمين"),
	(
		"features.multiUserAccessDesc",
		"نظام تحكم في الوصول قائم على الأدوار لمختلف الإدارات ومستويات المستخدمين",
	),
	("features.advancedAnalytics", "التحليلات المتقدمة"),
	(
		"features.advancedAnalyticsDesc",
		"تقارير شاملة وتحليلات متعمقة لاتخاذ قرارات مدروسة ومبنية على البيانات",
	),
	("features.smartDataManagement", "إدارة البيانات الذكية"),
	(
		"features.smartDataManagementDesc",
		"نظام متطور لإدارة وتنظيم البيانات الضخمة مع إمكانيات بحث وفلترة متقدمة",
	),
	("features.encryptionProtection", "التشفير والحماية"),
	(
		"features.encryptionProtectionDesc",
		"تشفير متقدم للبيانات الحساسة مع بروتوكولات أمان متعددة الطبقات",
	),
	// Hero Section
	("hero.ministryBadge", "وزارة الموارد البشرية والتنمية الاجتماعية"),
	("hero.advancedAnalysis", "تحليل متقدم بالذكاء الاصطناعي"),
	(
		"hero.advancedAnalysisDesc",
		"خوارزميات متطورة تكتشف أنماط الاحتيال بدقة استثنائية",
	),
	("hero.continuousMonitoring", "مراقبة مستمرة 24/7"),
	(
		"hero.continuousMonitoringDesc",
		"نظام مراقبة شامل للمعاملات المالية والأنشطة المشبوهة",
	),
	("hero.advancedSecurity", "حماية وأمان متقدم"),
	(
		"hero.advancedSecurityDesc",
		"أعلى معايير الأمان الحكومي والامتثال للوائح التنظيمية",
	),
	// Footer
	(
		"footer.description",
		"نظام متطور لكشف الاحتيال المالي والتلاعب في التوظيف، يعزز الشفافية المالية والكفاءة التنظيمية في وزارة الموارد البشرية والتنمية الاجتماعية",
	),
	("footer.quickLinks", "روابط سريعة"),
	("footer.contactInfo", "معلومات التواصل"),
	(
		"footer.developedWith",
		"تم تطويره بأعلى معايير الجودة والأمان للقطاع الحكومي",
	),
	("footer.availableLanguages", "متوفر باللغتين العربية والإنجليزية"),
	(
		"footer.allRightsReserved",
		"© 2024 وزارة الموارد البشرية والتنمية الاجتماعية. جميع الحقوق محفوظة.",
	),
	// Analysis results
	(
		"analysis.finding.1",
		"تم اكتشاف أنماط معاملات مشبوهة في السجلات المالية",
	),
	(
		"analysis.finding.2",
		"تم العثور على تناقضات في المستندات أثناء التحقق من التوظيف",
	),
	(
		"analysis.finding.3",
		"شذوذ في التحقق من الهوية في المستندات المقدمة",
	),
	(
		"analysis.finding.4",
		"تم تحديد أنماط غير معتادة في السجل الوظيفي",
	),
	(
		"analysis.recommendation.1",
		"مطلوب مراجعة يدوية فورية من فريق الامتثال",
	),
	(
		"analysis.recommendation.2",
		"يلزم التحقق بالتواصل مع جهات العمل السابقة",
	),
	(
		"analysis.recommendation.3",
		"طلب مستندات إضافية وإثبات الهوية",
	),
	(
		"analysis.recommendation.4",
		"تمييز القضية للتحقيق ذي الأولوية",
	),
];
